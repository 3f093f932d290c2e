//! Error types for predictor operations

mod predictor_error;

pub use predictor_error::PredictorError;

/// Result type for predictor operations
pub type Result<T> = std::result::Result<T, PredictorError>;
