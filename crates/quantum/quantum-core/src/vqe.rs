//! Variational quantum eigensolver driver

use quantum_spi::{Circuit, Minimizer, PauliSum, QuantumBackend, QuantumError, Result};
use tracing::{debug, info};

/// Outcome of a VQE run
#[derive(Debug, Clone, PartialEq)]
pub struct VqeResult {
    /// Lowest energy found
    pub eigenvalue: f64,
    /// Parameters reaching `eigenvalue`
    pub optimal_parameters: Vec<f64>,
    /// Outer-loop iterations
    pub iterations: usize,
    /// Circuit executions
    pub evaluations: usize,
    pub converged: bool,
    pub n_qubits: usize,
    pub circuit_depth: usize,
    pub gate_count: usize,
}

/// Minimum-eigenvalue search over an ansatz
///
/// Each objective evaluation executes the ansatz on the backend and takes
/// the expectation of the Hamiltonian. Failures from either step abort the
/// search.
pub struct Vqe<'a> {
    backend: &'a dyn QuantumBackend,
    minimizer: &'a dyn Minimizer,
}

impl<'a> Vqe<'a> {
    pub fn new(backend: &'a dyn QuantumBackend, minimizer: &'a dyn Minimizer) -> Self {
        Self { backend, minimizer }
    }

    /// Evaluate ⟨ψ(θ)|H|ψ(θ)⟩ once
    pub fn energy(&self, hamiltonian: &PauliSum, ansatz: &Circuit, parameters: &[f64]) -> Result<f64> {
        self.backend
            .execute(ansatz, parameters)?
            .expectation(hamiltonian)
    }

    /// Minimize the energy of `hamiltonian` starting from `initial`
    pub fn run(&self, hamiltonian: &PauliSum, ansatz: &Circuit, initial: &[f64]) -> Result<VqeResult> {
        if !self.backend.is_available() {
            return Err(QuantumError::Unavailable {
                backend: self.backend.name().to_string(),
            });
        }
        if hamiltonian.n_qubits() != ansatz.n_qubits() {
            return Err(QuantumError::DimensionMismatch {
                state: ansatz.n_qubits(),
                observable: hamiltonian.n_qubits(),
            });
        }
        if ansatz.n_qubits() > self.backend.max_qubits() {
            return Err(QuantumError::TooManyQubits {
                requested: ansatz.n_qubits(),
                max: self.backend.max_qubits(),
            });
        }
        ansatz.validate(initial)?;

        debug!(
            backend = self.backend.name(),
            qubits = ansatz.n_qubits(),
            params = ansatz.n_params(),
            terms = hamiltonian.num_terms(),
            "Starting VQE"
        );

        let mut objective = |theta: &[f64]| self.energy(hamiltonian, ansatz, theta);
        let outcome = self.minimizer.minimize(&mut objective, initial)?;

        if !outcome.value.is_finite() {
            return Err(QuantumError::NumericalInstability(format!(
                "minimum eigenvalue is {}",
                outcome.value
            )));
        }

        info!(
            eigenvalue = outcome.value,
            iterations = outcome.iterations,
            evaluations = outcome.evaluations,
            converged = outcome.converged,
            "VQE completed"
        );

        Ok(VqeResult {
            eigenvalue: outcome.value,
            optimal_parameters: outcome.point,
            iterations: outcome.iterations,
            evaluations: outcome.evaluations,
            converged: outcome.converged,
            n_qubits: ansatz.n_qubits(),
            circuit_depth: ansatz.depth(),
            gate_count: ansatz.gate_count(),
        })
    }
}
