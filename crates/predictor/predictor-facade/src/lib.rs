//! Predictor Facade
//!
//! High-level API for topic importance prediction. Re-exports all public
//! types from the predictor and quantum stacks for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use predictor_api::*;

// Explicit re-exports for documentation
pub use predictor_api::prelude;

/// Circuit, operator and VQE building blocks
pub mod vqe {
    pub use quantum_core::{AnsatzBuilder, NelderMead, Vqe, VqeResult};
    pub use quantum_spi::{
        Angle, Circuit, Gate, Measurement, MinimizationResult, Minimizer, Pauli, PauliString,
        PauliSum, QuantumError,
    };
}
