use chrono::NaiveDateTime;
use thiserror::Error;

/// Failures raised by the job record model itself.
///
/// Advancing a status track that is already terminal is not represented here:
/// it is a silent no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("Malformed price '{value}': expected a decimal from 0 to 999999999999.99")]
    MalformedPrice { value: String },

    #[error("Unknown status track: {0}")]
    UnknownTrack(String),

    #[error("Invalid {track} value: {value}")]
    InvalidStatus { track: &'static str, value: String },

    #[error("Invalid payment type: {0}")]
    InvalidPaymentType(String),

    #[error("Scheduled end {end} is before scheduled start {start}")]
    InvertedSchedule {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Line item index {index} out of range (job has {len} line items)")]
    LineItemOutOfRange { index: usize, len: usize },
}

pub type JobResult<T> = Result<T, JobError>;
