//! Model module containing circuit, operator and result types

mod circuit;
mod measurement;
mod minimization;
mod pauli;

pub use circuit::{Angle, Circuit, Gate};
pub use measurement::Measurement;
pub use minimization::MinimizationResult;
pub use pauli::{Pauli, PauliString, PauliSum};
