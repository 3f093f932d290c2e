//! Quantum error types

use thiserror::Error;

/// Errors raised while building or executing quantum circuits
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantumError {
    /// The execution backend cannot run circuits right now
    #[error("Quantum backend '{backend}' is unavailable")]
    Unavailable { backend: String },

    /// Circuit is wider than the backend supports
    #[error("Too many qubits: requested {requested}, backend supports at most {max}")]
    TooManyQubits { requested: usize, max: usize },

    /// Gate addresses a qubit outside the register
    #[error("Qubit {qubit} out of range for a {n_qubits}-qubit register")]
    InvalidQubit { qubit: usize, n_qubits: usize },

    /// Wrong number of bound parameters
    #[error("Parameter mismatch: circuit expects {expected} parameters, got {actual}")]
    ParameterMismatch { expected: usize, actual: usize },

    /// Observable and state act on registers of different width
    #[error("Dimension mismatch: state has {state} qubits, observable has {observable}")]
    DimensionMismatch { state: usize, observable: usize },

    /// Sampled measurements can only estimate Z-basis observables
    #[error("Observable contains X or Y terms and cannot be estimated from Z-basis counts")]
    NonDiagonalObservable,

    /// Invalid configuration value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// NaN or infinity produced during simulation or optimization
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Backend-specific failure
    #[error("Backend failure: {0}")]
    BackendFailure(String),
}
