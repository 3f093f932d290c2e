//! Data error types.

use thiserror::Error;

/// Historical data loading errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// File does not exist or cannot be opened
    #[error("Data file not found: {0}")]
    FileNotFound(String),

    /// Malformed CSV content
    #[error("Failed to parse CSV: {0}")]
    CsvError(String),

    /// Malformed JSON content
    #[error("Failed to parse JSON: {0}")]
    JsonError(String),

    /// File extension does not map to a known format
    #[error("Unsupported data format: {0}")]
    UnsupportedFormat(String),

    /// Nothing has been loaded yet
    #[error("No data loaded")]
    NoData,
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
