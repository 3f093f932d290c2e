//! Classical trend estimator
//!
//! Fits a first-degree least-squares line over the series indices and
//! extrapolates one period ahead. Series values are percentage-like
//! frequencies on a 0-100 scale, so the prediction is divided by 100 to
//! obtain an importance.
//!
//! ## When to Use
//!
//! - Quantum execution is disabled or unavailable
//! - As the recovery path when a quantum run fails
//! - As the classical half of a hybrid blend

use predictor_spi::{Estimate, ImportanceEstimator, PredictorError, Result, Trend};
use serde::{Deserialize, Serialize};

/// Two-sided 95% normal quantile
const Z_95: f64 = 1.96;

/// Scale of the input frequencies
const PERCENT: f64 = 100.0;

/// Ordinary least-squares fit `y = intercept + slope * t`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Residual standard deviation with n - 2 degrees of freedom
    pub std_error: f64,
    pub n_observations: usize,
}

impl LinearFit {
    /// Fit over time indices `0..n`
    pub fn fit(data: &[f64]) -> Result<Self> {
        if data.len() < 2 {
            return Err(PredictorError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }
        if data.iter().any(|y| !y.is_finite()) {
            return Err(PredictorError::ClassicalFailure(
                "series contains non-finite values".to_string(),
            ));
        }

        let n = data.len() as f64;

        let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
        let sum_y: f64 = data.iter().sum();
        let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
        let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

        let denominator = n * sum_t2 - sum_t * sum_t;
        if denominator.abs() < 1e-10 {
            return Err(PredictorError::ClassicalFailure(
                "singular matrix in regression".to_string(),
            ));
        }

        let slope = (n * sum_ty - sum_t * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_t) / n;

        let residuals: Vec<f64> = data
            .iter()
            .enumerate()
            .map(|(i, &y)| y - (intercept + slope * i as f64))
            .collect();

        // Two observations fit exactly and leave no degrees of freedom
        let std_error = if data.len() > 2 {
            let mean = residuals.iter().sum::<f64>() / n;
            let ss: f64 = residuals.iter().map(|r| (r - mean).powi(2)).sum();
            (ss / (n - 2.0)).sqrt()
        } else {
            0.0
        };

        Ok(Self {
            slope,
            intercept,
            std_error,
            n_observations: data.len(),
        })
    }

    /// Value of the fitted line at index `t`
    pub fn predict_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }

    /// One period past the last observation
    pub fn predict_next(&self) -> f64 {
        self.predict_at(self.n_observations as f64)
    }
}

/// Linear-trend importance estimator
///
/// Pure and deterministic: identical input yields bit-identical output.
///
/// # Example
///
/// ```rust
/// use predictor_core::{ClassicalEstimator, ImportanceEstimator, Trend};
///
/// let estimate = ClassicalEstimator::new()
///     .estimate(&[15.0, 18.0, 22.0, 25.0, 28.0], 0.95)
///     .unwrap();
/// assert_eq!(estimate.trend, Trend::Increasing);
/// assert!((estimate.importance - 0.315).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalEstimator;

impl ClassicalEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl ImportanceEstimator for ClassicalEstimator {
    fn name(&self) -> &str {
        "classical"
    }

    fn estimate(&self, series: &[f64], _confidence_level: f64) -> Result<Estimate> {
        let fit = LinearFit::fit(series)?;
        let predicted = fit.predict_next();
        let margin = Z_95 * fit.std_error;

        if !predicted.is_finite() || !margin.is_finite() {
            return Err(PredictorError::ClassicalFailure(format!(
                "non-finite extrapolation {} ± {}",
                predicted, margin
            )));
        }

        Ok(Estimate {
            importance: (predicted / PERCENT).clamp(0.0, 1.0),
            lower: ((predicted - margin) / PERCENT).clamp(0.0, 1.0),
            upper: ((predicted + margin) / PERCENT).clamp(0.0, 1.0),
            trend: Trend::from_slope(fit.slope),
            diagnostics: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() {
        let fit = LinearFit::fit(&[10.0, 12.0, 14.0, 16.0, 18.0, 20.0]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-10);
        assert!((fit.intercept - 10.0).abs() < 1e-10);
        assert!(fit.std_error.abs() < 1e-10);
        assert!((fit.predict_next() - 22.0).abs() < 1e-10);
    }

    #[test]
    fn test_reference_series() {
        let estimate = ClassicalEstimator::new()
            .estimate(&[15.0, 18.0, 22.0, 25.0, 28.0], 0.95)
            .unwrap();

        // slope 3.3, intercept 15.0, prediction 31.5
        assert!((estimate.importance - 0.315).abs() < 1e-10);
        assert_eq!(estimate.trend, Trend::Increasing);
        assert!(estimate.lower < estimate.importance);
        assert!(estimate.upper > estimate.importance);
        assert!(estimate.is_well_formed());
    }

    #[test]
    fn test_residual_standard_error() {
        // residuals of [1, 3, 2] around y = 1.5 + 0.5t are [-0.5, 1, -0.5]
        let fit = LinearFit::fit(&[1.0, 3.0, 2.0]).unwrap();
        assert!((fit.std_error - 1.5f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_two_points_have_zero_width() {
        let estimate = ClassicalEstimator::new().estimate(&[40.0, 50.0], 0.95).unwrap();
        assert!((estimate.importance - 0.6).abs() < 1e-10);
        assert_eq!(estimate.lower, estimate.importance);
        assert_eq!(estimate.upper, estimate.importance);
    }

    #[test]
    fn test_insufficient_data() {
        let err = ClassicalEstimator::new().estimate(&[5.0], 0.95).unwrap_err();
        assert_eq!(
            err,
            PredictorError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_trend_classification() {
        let est = ClassicalEstimator::new();
        assert_eq!(est.estimate(&[30.0, 20.0, 10.0], 0.9).unwrap().trend, Trend::Decreasing);
        assert_eq!(est.estimate(&[20.0, 20.0, 20.0], 0.9).unwrap().trend, Trend::Stable);
    }

    #[test]
    fn test_bounds_clamped_above_scale() {
        let estimate = ClassicalEstimator::new()
            .estimate(&[90.0, 120.0, 150.0], 0.95)
            .unwrap();
        assert_eq!(estimate.importance, 1.0);
        assert_eq!(estimate.upper, 1.0);
        assert!(estimate.is_well_formed());
    }

    #[test]
    fn test_bounds_clamped_below_zero() {
        let estimate = ClassicalEstimator::new()
            .estimate(&[30.0, 15.0, 1.0], 0.95)
            .unwrap();
        assert_eq!(estimate.importance, 0.0);
        assert_eq!(estimate.lower, 0.0);
        assert!(estimate.is_well_formed());
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = ClassicalEstimator::new()
            .estimate(&[1.0, f64::NAN, 3.0], 0.95)
            .unwrap_err();
        assert!(matches!(err, PredictorError::ClassicalFailure(_)));
    }

    #[test]
    fn test_deterministic() {
        let series = [12.5, 17.25, 9.0, 22.0, 19.5, 25.75];
        let a = ClassicalEstimator::new().estimate(&series, 0.95).unwrap();
        let b = ClassicalEstimator::new().estimate(&series, 0.95).unwrap();
        assert_eq!(a.importance.to_bits(), b.importance.to_bits());
        assert_eq!(a.lower.to_bits(), b.lower.to_bits());
        assert_eq!(a.upper.to_bits(), b.upper.to_bits());
    }
}
