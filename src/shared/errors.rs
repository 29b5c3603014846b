//! Error handling for the application

use thiserror::Error;

/// Price source errors (historical file or live fetch)
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("history file unreadable: {0}")]
    Unreadable(String),

    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("live price fetch failed: {0}")]
    FetchFailed(String),

    #[error("live response missing field: {0}")]
    MissingField(&'static str),
}

/// Checkpoint store errors
#[derive(Error, Debug)]
pub enum CheckpointError {
    #[error("checkpoint write failed: {0}")]
    WriteFailed(String),
}

/// Summary aggregation errors
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("no milestones to summarize")]
    EmptyMilestoneLog,
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Source error: {0}")]
    SourceError(String),

    #[error("Checkpoint error: {0}")]
    CheckpointError(String),

    #[error("Summary error: {0}")]
    SummaryError(String),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        AppError::SourceError(err.to_string())
    }
}

impl From<CheckpointError> for AppError {
    fn from(err: CheckpointError) -> Self {
        AppError::CheckpointError(err.to_string())
    }
}

impl From<SummaryError> for AppError {
    fn from(err: SummaryError) -> Self {
        AppError::SummaryError(err.to_string())
    }
}
