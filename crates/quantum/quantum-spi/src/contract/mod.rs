//! Contract module containing backend and optimizer traits

mod backend;
mod minimizer;

pub use backend::QuantumBackend;
pub use minimizer::Minimizer;
