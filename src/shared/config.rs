//! Runtime configuration read from the environment (and `.env` when present)
use crate::shared::errors::{AppError, AppResult};
use chrono::Duration;
use log::LevelFilter;
use std::env;
use std::str::FromStr;

pub const LOG_LEVEL_VAR: &str = "CREWDESK_LOG_LEVEL";
pub const SEED_SAMPLE_JOBS_VAR: &str = "CREWDESK_SEED_SAMPLE_JOBS";
pub const DEFAULT_JOB_DURATION_VAR: &str = "CREWDESK_DEFAULT_JOB_DURATION_MINUTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    /// Load the placeholder jobs into an empty store at startup
    pub seed_sample_jobs: bool,
    /// End time for jobs created with only a start time
    pub default_job_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            seed_sample_jobs: true,
            default_job_duration: Duration::minutes(120),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            config.log_level = LevelFilter::from_str(raw.trim()).map_err(|_| {
                AppError::ConfigError(format!("{} has invalid level '{}'", LOG_LEVEL_VAR, raw))
            })?;
        }

        if let Some(raw) = lookup(SEED_SAMPLE_JOBS_VAR) {
            config.seed_sample_jobs = parse_flag(SEED_SAMPLE_JOBS_VAR, &raw)?;
        }

        if let Some(raw) = lookup(DEFAULT_JOB_DURATION_VAR) {
            let minutes: u32 = raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "{} must be a whole number of minutes, got '{}'",
                    DEFAULT_JOB_DURATION_VAR, raw
                ))
            })?;
            config.default_job_duration = Duration::minutes(minutes as i64);
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::ConfigError(format!(
            "{} must be true or false, got '{}'",
            key, raw
        ))),
    }
}
