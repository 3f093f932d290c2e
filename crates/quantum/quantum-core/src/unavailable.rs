//! Backend placeholder used when quantum execution is disabled

use quantum_spi::{Circuit, Measurement, QuantumBackend, QuantumError, Result};

/// Backend that never executes
#[derive(Debug, Clone)]
pub struct UnavailableBackend {
    name: String,
}

impl UnavailableBackend {
    pub fn new() -> Self {
        Self {
            name: "unavailable".to_string(),
        }
    }

    /// Report a specific backend name in errors
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for UnavailableBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantumBackend for UnavailableBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        false
    }

    fn max_qubits(&self) -> usize {
        0
    }

    fn execute(&self, _circuit: &Circuit, _parameters: &[f64]) -> Result<Measurement> {
        Err(QuantumError::Unavailable {
            backend: self.name.clone(),
        })
    }
}
