//! Error types for loading and writing tabular data

use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Unsupported format: {0}. Only .csv and .xlsx are supported")]
    UnsupportedFormat(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Missing required columns: {0}")]
    MissingColumns(String),

    #[error("Invalid value in column '{column}': {value:?}")]
    InvalidValue { column: String, value: String },

    #[error("Empty table: {0}")]
    EmptyTable(String),

    #[error("Failed to write file: {0}")]
    WriteFailed(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
