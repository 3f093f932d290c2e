//! Predictor error types

use quantum_spi::QuantumError;
use thiserror::Error;

/// Errors raised by estimators, configuration and request validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictorError {
    /// Caller supplied a malformed request
    #[error("Invalid request field '{field}': {reason}")]
    InvalidRequest { field: String, reason: String },

    /// Configuration value out of range or unparsable
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    /// Series too short for the estimator
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Quantum execution capability is not available
    #[error("Quantum backend '{backend}' is unavailable")]
    QuantumUnavailable { backend: String },

    /// Failure while building or optimizing the variational circuit
    #[error("Quantum execution failed: {0}")]
    QuantumExecution(#[from] QuantumError),

    /// Classical estimator could not produce a result
    #[error("Classical estimation failed: {0}")]
    ClassicalFailure(String),
}

impl PredictorError {
    /// Shorthand for an [`InvalidRequest`](PredictorError::InvalidRequest)
    pub fn invalid_request(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`InvalidConfig`](PredictorError::InvalidConfig)
    pub fn invalid_config(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors raised on the quantum path
    pub fn is_quantum(&self) -> bool {
        matches!(
            self,
            Self::QuantumUnavailable { .. } | Self::QuantumExecution(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_data_message() {
        let error = PredictorError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 2 points, got 1"
        );
    }

    #[test]
    fn test_invalid_request_message() {
        let error = PredictorError::invalid_request("topics", "must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid request field 'topics': must not be empty"
        );
    }

    #[test]
    fn test_quantum_error_converts() {
        let source = QuantumError::NumericalInstability("energy is NaN".to_string());
        let error: PredictorError = source.clone().into();
        assert_eq!(error, PredictorError::QuantumExecution(source));
        assert!(error.is_quantum());
        assert!(error.source().is_some());
    }

    #[test]
    fn test_classical_failure_is_not_quantum() {
        assert!(!PredictorError::ClassicalFailure("singular".to_string()).is_quantum());
    }
}
