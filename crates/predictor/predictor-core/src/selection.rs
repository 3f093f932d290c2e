//! Method selection policy

use predictor_spi::{BlendWeights, PredictionMethod};

/// Confidence at which the quantum estimator is used alone
pub const QUANTUM_ONLY_CONFIDENCE: f64 = 0.99;

/// Hybrid weight table, highest threshold first
const HYBRID_TIERS: [(f64, BlendWeights); 3] = [
    (0.95, BlendWeights::new(0.9, 0.1)),
    (0.90, BlendWeights::new(0.7, 0.3)),
    (0.85, BlendWeights::new(0.6, 0.4)),
];

const HYBRID_FLOOR: BlendWeights = BlendWeights::new(0.4, 0.6);

/// Outcome of the selection policy for one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MethodSelection {
    /// Classical estimator only; `fallback` when chosen because quantum is unavailable
    Classical { fallback: bool },
    Quantum,
    Hybrid(BlendWeights),
}

impl MethodSelection {
    /// Method reported at the response level
    pub fn method(&self) -> PredictionMethod {
        match self {
            MethodSelection::Classical { fallback: false } => PredictionMethod::Classical,
            MethodSelection::Classical { fallback: true } => PredictionMethod::ClassicalFallback,
            MethodSelection::Quantum => PredictionMethod::Quantum,
            MethodSelection::Hybrid(_) => PredictionMethod::Hybrid,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, MethodSelection::Classical { fallback: true })
    }

    pub fn uses_quantum(&self) -> bool {
        matches!(self, MethodSelection::Quantum | MethodSelection::Hybrid(_))
    }

    pub fn weights(&self) -> Option<BlendWeights> {
        match self {
            MethodSelection::Hybrid(weights) => Some(*weights),
            _ => None,
        }
    }
}

/// Choose the estimation method for a request
///
/// Pure: identical arguments always produce the same selection.
pub fn select_method(
    quantum_available: bool,
    force_classical: bool,
    confidence_level: f64,
) -> MethodSelection {
    if force_classical {
        return MethodSelection::Classical { fallback: false };
    }
    if !quantum_available {
        return MethodSelection::Classical { fallback: true };
    }
    if confidence_level >= QUANTUM_ONLY_CONFIDENCE {
        return MethodSelection::Quantum;
    }

    let weights = HYBRID_TIERS
        .iter()
        .find(|(threshold, _)| confidence_level >= *threshold)
        .map(|(_, weights)| *weights)
        .unwrap_or(HYBRID_FLOOR);
    MethodSelection::Hybrid(weights)
}
