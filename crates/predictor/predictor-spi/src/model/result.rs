//! Estimator outputs and response records

use serde::{Deserialize, Serialize};

use super::{PredictionMethod, Trend};

/// Resource usage and outcome of one VQE run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumDiagnostics {
    pub qubits: usize,
    pub circuit_depth: usize,
    pub gate_count: usize,
    /// Outer-loop iterations performed
    pub iterations: usize,
    /// Minimum eigenvalue found
    pub eigenvalue: f64,
    pub converged: bool,
}

/// Raw output of a single estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Importance in [0, 1]
    pub importance: f64,
    pub lower: f64,
    pub upper: f64,
    pub trend: Trend,
    /// Present when the estimate came from a quantum run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<QuantumDiagnostics>,
}

impl Estimate {
    /// Half-width of the confidence interval
    pub fn uncertainty(&self) -> f64 {
        (self.upper - self.lower) / 2.0
    }

    /// `0 <= lower <= importance <= upper <= 1`
    pub fn is_well_formed(&self) -> bool {
        0.0 <= self.lower
            && self.lower <= self.importance
            && self.importance <= self.upper
            && self.upper <= 1.0
    }
}

/// Per-method uncertainty of a hybrid prediction
///
/// `blended_uncertainty` is the contribution-weighted sum of the other two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyQuantification {
    pub quantum_uncertainty: f64,
    pub classical_uncertainty: f64,
    pub blended_uncertainty: f64,
}

/// Prediction for one topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub topic: String,
    pub importance: f64,
    /// `(lower, upper)`, serialized as a two-element array
    pub confidence_interval: (f64, f64),
    pub trend: Trend,
    pub method: PredictionMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum_contribution: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classical_contribution: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<UncertaintyQuantification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<QuantumDiagnostics>,
}

impl PredictionResult {
    /// Single-method result
    pub fn from_estimate(topic: impl Into<String>, estimate: Estimate, method: PredictionMethod) -> Self {
        Self {
            topic: topic.into(),
            importance: estimate.importance,
            confidence_interval: (estimate.lower, estimate.upper),
            trend: estimate.trend,
            method,
            quantum_contribution: None,
            classical_contribution: None,
            uncertainty: None,
            diagnostics: estimate.diagnostics,
        }
    }

    pub fn lower(&self) -> f64 {
        self.confidence_interval.0
    }

    pub fn upper(&self) -> f64 {
        self.confidence_interval.1
    }

    pub fn is_hybrid(&self) -> bool {
        self.method == PredictionMethod::Hybrid
    }
}

/// Batch response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Results in request order; skipped topics are omitted
    pub predictions: Vec<PredictionResult>,
    /// Wall-clock span of the whole batch
    pub execution_time_ms: u64,
    /// Whether any topic went through a fallback path
    pub fallback_used: bool,
    /// Method chosen by the selection policy for this request
    pub method_used: PredictionMethod,
}

impl PredictionResponse {
    /// Look up the result for `topic`
    pub fn get(&self, topic: &str) -> Option<&PredictionResult> {
        self.predictions.iter().find(|p| p.topic == topic)
    }
}
