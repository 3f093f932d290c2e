//! Classical outer-loop optimizer

use crate::error::Result;
use crate::model::MinimizationResult;

/// Derivative-free minimizer driving a variational search
pub trait Minimizer: Send + Sync {
    /// Minimize `objective` starting from `initial`
    ///
    /// An error returned by the objective aborts the search and is
    /// propagated unchanged.
    fn minimize(
        &self,
        objective: &mut dyn FnMut(&[f64]) -> Result<f64>,
        initial: &[f64],
    ) -> Result<MinimizationResult>;

    /// Upper bound on outer-loop iterations
    fn max_iterations(&self) -> usize;
}
