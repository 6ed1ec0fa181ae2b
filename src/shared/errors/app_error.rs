use crate::modules::jobs::domain::errors::JobError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<JobError> for AppError {
    fn from(err: JobError) -> Self {
        match err {
            JobError::MalformedPrice { .. }
            | JobError::InvalidStatus { .. }
            | JobError::InvalidPaymentType(_)
            | JobError::UnknownTrack(_) => AppError::InvalidInput(err.to_string()),
            JobError::InvertedSchedule { .. } | JobError::LineItemOutOfRange { .. } => {
                AppError::ValidationError(err.to_string())
            }
        }
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::InvalidInput(format!("Invalid date/time: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_errors_map_to_app_errors() {
        let err: AppError = JobError::UnknownTrack("mileage".to_string()).into();
        assert_eq!(
            err,
            AppError::InvalidInput("Unknown status track: mileage".to_string())
        );

        let err: AppError = JobError::LineItemOutOfRange { index: 3, len: 1 }.into();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let err = AppError::NotFound("Job with ID 7 not found".to_string());
        let value = serde_json::to_value(&err).unwrap();

        assert_eq!(value["type"], "NotFound");
        assert_eq!(value["message"], "Job with ID 7 not found");
    }
}
