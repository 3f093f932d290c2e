//! Predictor configuration

use std::str::FromStr;
use std::sync::Arc;

use predictor_core::{QuantumPatternEstimator, TopicPredictor};
use predictor_spi::{PredictorError, Result};
use quantum_core::statevector::MAX_QUBITS;
use quantum_spi::QuantumBackend;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Static settings for a [`TopicPredictor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Widest register used by the quantum estimator
    pub max_qubits: usize,
    /// Outer-loop iteration cap for the variational search
    pub max_iterations: usize,
    /// Series shorter than this are skipped
    pub min_historical_years: usize,
    /// Whether the quantum path may be used at all
    pub quantum_enabled: bool,
    /// CX + RY repetitions in the ansatz
    pub ansatz_reps: usize,
    /// Simplex value spread at which the search stops
    pub convergence_tolerance: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 6,
            max_iterations: 100,
            min_historical_years: 3,
            quantum_enabled: true,
            ansatz_reps: 2,
            convergence_tolerance: 1e-6,
        }
    }
}

impl PredictorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by process environment and an optional `.env` file
    ///
    /// Reads `MAX_QUBITS`, `MAX_ITERATIONS`, `MIN_HISTORICAL_YEARS`,
    /// `QUANTUM_AVAILABLE` and `ANSATZ_REPS`.
    pub fn from_env() -> Result<Self> {
        // .env is optional
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("MAX_QUBITS") {
            config.max_qubits = parse("MAX_QUBITS", &v)?;
        }
        if let Some(v) = lookup("MAX_ITERATIONS") {
            config.max_iterations = parse("MAX_ITERATIONS", &v)?;
        }
        if let Some(v) = lookup("MIN_HISTORICAL_YEARS") {
            config.min_historical_years = parse("MIN_HISTORICAL_YEARS", &v)?;
        }
        if let Some(v) = lookup("QUANTUM_AVAILABLE") {
            config.quantum_enabled = parse_bool("QUANTUM_AVAILABLE", &v)?;
        }
        if let Some(v) = lookup("ANSATZ_REPS") {
            config.ansatz_reps = parse("ANSATZ_REPS", &v)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_min_historical_years(mut self, years: usize) -> Self {
        self.min_historical_years = years;
        self
    }

    pub fn with_quantum_enabled(mut self, enabled: bool) -> Self {
        self.quantum_enabled = enabled;
        self
    }

    pub fn with_ansatz_reps(mut self, reps: usize) -> Self {
        self.ansatz_reps = reps;
        self
    }

    pub fn with_convergence_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence_tolerance = tolerance;
        self
    }

    /// Check every setting is usable
    pub fn validate(&self) -> Result<()> {
        if self.max_qubits == 0 {
            return Err(PredictorError::invalid_config("max_qubits", "must be at least 1"));
        }
        if self.max_qubits > MAX_QUBITS {
            return Err(PredictorError::invalid_config(
                "max_qubits",
                format!("simulator supports at most {} qubits", MAX_QUBITS),
            ));
        }
        if self.max_iterations == 0 {
            return Err(PredictorError::invalid_config(
                "max_iterations",
                "must be at least 1",
            ));
        }
        if self.min_historical_years < 2 {
            return Err(PredictorError::invalid_config(
                "min_historical_years",
                "the classical estimator needs at least 2 observations",
            ));
        }
        if !(self.convergence_tolerance >= 0.0 && self.convergence_tolerance.is_finite()) {
            return Err(PredictorError::invalid_config(
                "convergence_tolerance",
                "must be a finite non-negative number",
            ));
        }
        Ok(())
    }

    /// Build a predictor over `backend`
    ///
    /// Quantum prediction is used only when enabled here and the backend
    /// reports itself available; otherwise the predictor is classical-only.
    pub fn build_predictor(&self, backend: Arc<dyn QuantumBackend>) -> Result<TopicPredictor> {
        self.validate()?;

        let predictor =
            TopicPredictor::classical_only().with_min_historical_years(self.min_historical_years);

        if !self.quantum_enabled {
            info!("Quantum prediction disabled by configuration");
            return Ok(predictor);
        }

        match QuantumPatternEstimator::new(backend) {
            Ok(estimator) => {
                info!(
                    backend = estimator.backend_name(),
                    max_qubits = self.max_qubits,
                    max_iterations = self.max_iterations,
                    "Quantum prediction enabled"
                );
                Ok(predictor.with_quantum_estimator(
                    estimator
                        .with_max_qubits(self.max_qubits)
                        .with_max_iterations(self.max_iterations)
                        .with_ansatz_reps(self.ansatz_reps)
                        .with_tolerance(self.convergence_tolerance),
                ))
            }
            Err(e) => {
                warn!(error = %e, "Quantum backend unavailable, using classical prediction");
                Ok(predictor)
            }
        }
    }
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PredictorError::invalid_config(name, format!("cannot parse '{}'", value)))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PredictorError::invalid_config(
            name,
            format!("expected a boolean, got '{}'", value),
        )),
    }
}
