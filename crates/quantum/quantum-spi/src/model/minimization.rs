//! Minimizer output

use serde::{Deserialize, Serialize};

/// Result of a classical outer-loop minimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimizationResult {
    /// Best parameter vector found
    pub point: Vec<f64>,
    /// Objective value at `point`
    pub value: f64,
    /// Outer-loop iterations performed
    pub iterations: usize,
    /// Objective evaluations performed
    pub evaluations: usize,
    /// Whether the tolerance was reached before the iteration cap
    pub converged: bool,
}
