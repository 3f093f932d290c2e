//! Importance estimator trait

use crate::error::Result;
use crate::model::Estimate;

/// Maps a historical frequency series to an importance estimate
///
/// Implementations are stateless between calls and must be shareable
/// across threads.
pub trait ImportanceEstimator: Send + Sync {
    /// Estimator name used in logs
    fn name(&self) -> &str;

    /// Estimate the next-period importance of `series`
    ///
    /// # Arguments
    /// * `series` - Ordered observations, one per period
    /// * `confidence_level` - Requested confidence in [0, 1]
    fn estimate(&self, series: &[f64], confidence_level: f64) -> Result<Estimate>;
}
