//! VQE-based pattern estimator
//!
//! Encodes the series as a problem Hamiltonian, searches the layered RY/CX
//! ansatz for its minimum eigenvalue and maps the eigenvalue onto the
//! importance scale.

use std::sync::Arc;

use predictor_spi::{
    Estimate, ImportanceEstimator, PredictorError, QuantumDiagnostics, Result, Trend,
};
use quantum_core::{AnsatzBuilder, NelderMead, Vqe};
use quantum_spi::QuantumBackend;
use tracing::debug;

use crate::encoding::SeriesEncoding;

/// Two-sided 95% normal quantile
const Z_95: f64 = 1.96;

/// Spread assumed when the series is too short to measure one
const DEFAULT_SPREAD: f64 = 0.1;

/// Quantum pattern estimator
///
/// Holds an injected execution backend. Construction fails when the
/// backend reports itself unavailable; later failures surface as
/// [`PredictorError::QuantumExecution`] and are never retried here.
pub struct QuantumPatternEstimator {
    backend: Arc<dyn QuantumBackend>,
    max_qubits: usize,
    max_iterations: usize,
    ansatz_reps: usize,
    tolerance: f64,
}

impl QuantumPatternEstimator {
    /// Create an estimator over `backend`
    pub fn new(backend: Arc<dyn QuantumBackend>) -> Result<Self> {
        if !backend.is_available() {
            return Err(PredictorError::QuantumUnavailable {
                backend: backend.name().to_string(),
            });
        }
        Ok(Self {
            backend,
            max_qubits: 6,
            max_iterations: 100,
            ansatz_reps: 2,
            tolerance: 1e-6,
        })
    }

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_ansatz_reps(mut self, reps: usize) -> Self {
        self.ansatz_reps = reps;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Register width used for a series of length `n`
    pub fn qubits_for(&self, n: usize) -> usize {
        n.min(self.max_qubits).min(self.backend.max_qubits())
    }
}

impl ImportanceEstimator for QuantumPatternEstimator {
    fn name(&self) -> &str {
        "quantum"
    }

    fn estimate(&self, series: &[f64], confidence_level: f64) -> Result<Estimate> {
        let encoding = SeriesEncoding::encode(series, self.qubits_for(series.len()))?;
        let q = encoding.n_qubits();

        let builder = AnsatzBuilder::new(q).with_reps(self.ansatz_reps);
        let ansatz = builder.build();
        let minimizer = NelderMead::new()
            .with_max_iterations(self.max_iterations)
            .with_tolerance(self.tolerance);

        debug!(
            qubits = q,
            depth = ansatz.depth(),
            params = builder.n_params(),
            "Running VQE"
        );

        let run = Vqe::new(self.backend.as_ref(), &minimizer).run(
            encoding.hamiltonian(),
            &ansatz,
            &builder.initial_parameters(),
        )?;

        let importance = ((run.eigenvalue + 2.0) / 4.0).clamp(0.0, 1.0);

        let n = series.len();
        let spread = if n > 1 {
            population_std(series) / n as f64
        } else {
            DEFAULT_SPREAD
        };
        let margin = Z_95 * spread * (1.0 - confidence_level);

        let trend = match series {
            [.., previous, last] if last > previous => Trend::Increasing,
            [.., _, _] => Trend::Decreasing,
            _ => Trend::Stable,
        };

        Ok(Estimate {
            importance,
            lower: (importance - margin).max(0.0),
            upper: (importance + margin).min(1.0),
            trend,
            diagnostics: Some(QuantumDiagnostics {
                qubits: run.n_qubits,
                circuit_depth: run.circuit_depth,
                gate_count: run.gate_count,
                iterations: run.iterations,
                eigenvalue: run.eigenvalue,
                converged: run.converged,
            }),
        })
    }
}

fn population_std(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    (data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
}
