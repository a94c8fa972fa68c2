//! Error handling for the feedback insights application

use crate::input::format::FormatKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("{format} extraction failed: {cause}")]
    ExtractionFailed { format: FormatKind, cause: String },

    #[error("No usable text column: {0}")]
    MissingTextColumn(String),

    #[error("No feedback records survived normalization")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeedbackError>;

impl FeedbackError {
    /// Wrap an extractor failure with the format that was being parsed.
    pub fn extraction(format: FormatKind, cause: impl std::fmt::Display) -> Self {
        FeedbackError::ExtractionFailed {
            format,
            cause: cause.to_string(),
        }
    }
}

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for FeedbackError {
    fn from(err: anyhow::Error) -> Self {
        FeedbackError::InvalidInput(err.to_string())
    }
}
