/// Unified error handling module
use crate::domain::{Failure, Operation, OperationOutcome, Outcome};
use crate::extract::UpstreamCause;
use thiserror::Error;

/// Rejected command-line input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid date, use YYYY-MM-DD.")]
    BadFormat,
    #[error("Invalid date, use correct values for year, month, day.")]
    BadCalendarValue,
    #[error("Invalid dates, end date must be after start date.")]
    EndBeforeStart,
    #[error("Date must not be after today.")]
    FutureDate,
    #[error("Invalid file name.")]
    EmptyName,
    #[error("Invalid file name, must contain characters and end with {required}.")]
    WrongExtension { required: String },
}

impl ValidationError {
    /// Stable machine-readable reason code
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::BadFormat => "bad_format",
            ValidationError::BadCalendarValue => "bad_calendar_value",
            ValidationError::EndBeforeStart => "end_before_start",
            ValidationError::FutureDate => "future_date",
            ValidationError::EmptyName => "empty_name",
            ValidationError::WrongExtension { .. } => "wrong_extension",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not set (export API_KEY=<key>, or API_KEY=DEMO_KEY)")]
    MissingApiKey,
    #[error("{key} must be a whole number of seconds, got {value:?}")]
    InvalidNumber { key: String, value: String },
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Everything that can stop an operation after it has been dispatched
#[derive(Debug, Error)]
pub enum ExploreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid date/API key. {}", .operation.upstream_hint())]
    UpstreamShape {
        operation: Operation,
        status: u16,
        cause: UpstreamCause,
    },
    #[error("External API error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Could not save output: {0}")]
    Persistence(#[from] PersistError),
}

impl ExploreError {
    pub fn reason(&self) -> &'static str {
        match self {
            ExploreError::Validation(e) => e.reason(),
            ExploreError::UpstreamShape { .. } => "upstream_shape",
            ExploreError::Transport(_) => "transport",
            ExploreError::Persistence(_) => "persistence",
        }
    }
}

impl From<ExploreError> for OperationOutcome {
    fn from(err: ExploreError) -> Self {
        let message = err.to_string();
        let (failure, http_status_code) = match err {
            ExploreError::Validation(e) => (Failure::InvalidInput(e), None),
            ExploreError::UpstreamShape { status, cause, .. } => {
                (Failure::UpstreamShape(cause), Some(status))
            }
            ExploreError::Transport(e) => (Failure::Transport, e.status().map(|s| s.as_u16())),
            ExploreError::Persistence(_) => (Failure::Persistence, None),
        };

        OperationOutcome {
            outcome: Outcome::Failed(failure),
            http_status_code,
            message,
        }
    }
}
