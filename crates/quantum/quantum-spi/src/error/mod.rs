//! Error module containing error types and result aliases

mod quantum_error;

pub use quantum_error::QuantumError;

/// Result type for quantum operations
pub type Result<T> = std::result::Result<T, QuantumError>;
