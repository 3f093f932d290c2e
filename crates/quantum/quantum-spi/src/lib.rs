//! Quantum Service Provider Interface
//!
//! Defines the circuit model, Pauli operators, measurement results and the
//! execution-backend and minimizer contracts used by variational eigensolvers.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Minimizer, QuantumBackend};
pub use error::{QuantumError, Result};
pub use model::{
    Angle, Circuit, Gate, Measurement, MinimizationResult, Pauli, PauliString, PauliSum,
};

/// Complex amplitude type shared by backends
pub use num_complex::Complex64;
