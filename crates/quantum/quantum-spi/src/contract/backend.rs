//! Circuit execution capability

use crate::error::Result;
use crate::model::{Circuit, Measurement};

/// Injected circuit-execution capability
///
/// Implementations may be local simulators or remote services. Callers must
/// check [`is_available`](QuantumBackend::is_available) before relying on
/// [`execute`](QuantumBackend::execute).
pub trait QuantumBackend: Send + Sync {
    /// Backend name used in logs and errors
    fn name(&self) -> &str;

    /// Whether circuits can be executed right now
    fn is_available(&self) -> bool;

    /// Widest register the backend accepts
    fn max_qubits(&self) -> usize;

    /// Run `circuit` with `parameters` bound to its parameter slots
    fn execute(&self, circuit: &Circuit, parameters: &[f64]) -> Result<Measurement>;
}
