//! Estimation method and blend weights

use serde::{Deserialize, Serialize};
use std::fmt;

/// Method that produced a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionMethod {
    Classical,
    Quantum,
    Hybrid,
    /// Classical estimate produced because the quantum path was unavailable or failed
    ClassicalFallback,
}

impl PredictionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionMethod::Classical => "classical",
            PredictionMethod::Quantum => "quantum",
            PredictionMethod::Hybrid => "hybrid",
            PredictionMethod::ClassicalFallback => "classical_fallback",
        }
    }
}

impl fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantum/classical contribution weights of a hybrid prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub quantum: f64,
    pub classical: f64,
}

impl BlendWeights {
    pub const fn new(quantum: f64, classical: f64) -> Self {
        Self { quantum, classical }
    }

    /// Weighted combination `quantum·q + classical·c`
    pub fn blend(&self, quantum_value: f64, classical_value: f64) -> f64 {
        self.quantum * quantum_value + self.classical * classical_value
    }
}
