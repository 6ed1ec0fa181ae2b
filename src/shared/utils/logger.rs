use crate::modules::jobs::domain::{JobId, StatusTrack};
use log::{debug, info, LevelFilter};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup; later calls are ignored
pub fn init_logger(level: LevelFilter) {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Warn) // Dependencies stay quiet
            .filter_module("crewdesk_lib", level)
            .filter_module("crewdesk", level)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for job events
pub struct LogContext;

impl LogContext {
    pub fn job_created(id: &JobId, title: &str) {
        info!("Job: created {} '{}'", id, title);
    }

    pub fn job_updated(id: &JobId, section: &str) {
        debug!("Job: {} updated {}", id, section);
    }

    /// Log a status track change, or the absorbed advance at a terminal value
    pub fn status_transition(id: &JobId, track: StatusTrack, from: &str, to: &str) {
        if from == to {
            debug!(
                "Status: {} {} already at terminal '{}', advance ignored",
                id, track, from
            );
        } else {
            info!("Status: {} {} '{}' -> '{}'", id, track, from, to);
        }
    }

    pub fn calendar_query(from: &str, to: &str, results: usize) {
        debug!("Calendar: {} .. {} returned {} events", from, to, results);
    }
}
