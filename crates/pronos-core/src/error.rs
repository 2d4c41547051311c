//! Error types for Pronos

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Expected a JSON array of sales observations")]
    InvalidInput,

    #[error("At least 2 sales observations are required")]
    InsufficientData,

    #[error("Required fields: fecha, ventas")]
    MissingFields,

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid sales value: {0}")]
    InvalidValue(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error was caused by the request payload (as opposed to
    /// an IO-level failure reading a local file).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput
                | Error::InsufficientData
                | Error::MissingFields
                | Error::InvalidDate(_)
                | Error::InvalidValue(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
