//! Quantum Core
//!
//! Local implementations of the quantum SPI: an exact state-vector
//! simulator, the layered RY/CX ansatz, a Nelder-Mead outer loop and the
//! VQE driver that ties them together.

pub mod ansatz;
pub mod nelder_mead;
pub mod statevector;
pub mod unavailable;
pub mod vqe;

// Re-export SPI types for implementations
pub use quantum_spi::{
    Angle, Circuit, Gate, Measurement, MinimizationResult, Minimizer, Pauli, PauliString,
    PauliSum, QuantumBackend, QuantumError, Result,
};

// Re-export main types
pub use ansatz::AnsatzBuilder;
pub use nelder_mead::NelderMead;
pub use statevector::StatevectorBackend;
pub use unavailable::UnavailableBackend;
pub use vqe::{Vqe, VqeResult};
