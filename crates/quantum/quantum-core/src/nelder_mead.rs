//! Nelder-Mead simplex minimizer
//!
//! Derivative-free, so every step costs only objective evaluations. The
//! search stops when the spread of objective values across the simplex
//! falls below the tolerance or the iteration cap is reached.

use quantum_spi::{MinimizationResult, Minimizer, QuantumError, Result};
use tracing::debug;

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Simplex minimizer with standard coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct NelderMead {
    max_iterations: usize,
    tolerance: f64,
    initial_step: f64,
}

impl NelderMead {
    pub fn new() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
            initial_step: 0.5,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Convergence threshold on the simplex value spread
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Offset applied to each coordinate when building the first simplex
    pub fn with_initial_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for NelderMead {
    fn default() -> Self {
        Self::new()
    }
}

struct Counted<'a> {
    objective: &'a mut dyn FnMut(&[f64]) -> Result<f64>,
    evaluations: usize,
}

impl Counted<'_> {
    fn call(&mut self, point: &[f64]) -> Result<f64> {
        self.evaluations += 1;
        let value = (self.objective)(point)?;
        if value.is_nan() {
            return Err(QuantumError::NumericalInstability(
                "objective returned NaN".to_string(),
            ));
        }
        Ok(value)
    }
}

fn combine(a: &[f64], b: &[f64], t: f64) -> Vec<f64> {
    // a + t * (b - a)
    a.iter().zip(b).map(|(&x, &y)| x + t * (y - x)).collect()
}

impl Minimizer for NelderMead {
    fn minimize(
        &self,
        objective: &mut dyn FnMut(&[f64]) -> Result<f64>,
        initial: &[f64],
    ) -> Result<MinimizationResult> {
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(QuantumError::InvalidParameter {
                name: "tolerance".to_string(),
                reason: "must be a non-negative number".to_string(),
            });
        }

        let mut f = Counted {
            objective,
            evaluations: 0,
        };
        let n = initial.len();

        if n == 0 {
            let value = f.call(initial)?;
            return Ok(MinimizationResult {
                point: Vec::new(),
                value,
                iterations: 0,
                evaluations: f.evaluations,
                converged: true,
            });
        }

        let mut simplex: Vec<(Vec<f64>, f64)> = Vec::with_capacity(n + 1);
        simplex.push((initial.to_vec(), f.call(initial)?));
        for i in 0..n {
            let mut vertex = initial.to_vec();
            vertex[i] += self.initial_step;
            let value = f.call(&vertex)?;
            simplex.push((vertex, value));
        }

        let mut iterations = 0;
        let mut converged = false;

        loop {
            simplex.sort_by(|a, b| a.1.total_cmp(&b.1));

            if simplex[n].1 - simplex[0].1 <= self.tolerance {
                converged = true;
                break;
            }
            if iterations >= self.max_iterations {
                break;
            }
            iterations += 1;

            let mut centroid = vec![0.0; n];
            for (vertex, _) in &simplex[..n] {
                for (c, x) in centroid.iter_mut().zip(vertex) {
                    *c += x / n as f64;
                }
            }

            let best = simplex[0].1;
            let second_worst = simplex[n - 1].1;
            let (worst_point, worst) = simplex[n].clone();

            let reflected = combine(&centroid, &worst_point, -REFLECTION);
            let f_reflected = f.call(&reflected)?;

            if f_reflected < best {
                let expanded = combine(&centroid, &reflected, EXPANSION);
                let f_expanded = f.call(&expanded)?;
                simplex[n] = if f_expanded < f_reflected {
                    (expanded, f_expanded)
                } else {
                    (reflected, f_reflected)
                };
                continue;
            }

            if f_reflected < second_worst {
                simplex[n] = (reflected, f_reflected);
                continue;
            }

            let (contracted, accept_below) = if f_reflected < worst {
                (combine(&centroid, &reflected, CONTRACTION), f_reflected)
            } else {
                (combine(&centroid, &worst_point, CONTRACTION), worst)
            };
            let f_contracted = f.call(&contracted)?;
            if f_contracted < accept_below {
                simplex[n] = (contracted, f_contracted);
                continue;
            }

            let anchor = simplex[0].0.clone();
            for vertex in simplex.iter_mut().skip(1) {
                let shrunk = combine(&anchor, &vertex.0, SHRINK);
                let value = f.call(&shrunk)?;
                *vertex = (shrunk, value);
            }
        }

        let (point, value) = simplex.swap_remove(0);
        debug!(
            iterations,
            evaluations = f.evaluations,
            value,
            converged,
            "Nelder-Mead finished"
        );

        Ok(MinimizationResult {
            point,
            value,
            iterations,
            evaluations: f.evaluations,
            converged,
        })
    }

    fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_bowl() {
        let minimizer = NelderMead::new()
            .with_max_iterations(500)
            .with_tolerance(1e-12);
        let mut objective = |x: &[f64]| -> Result<f64> { Ok((x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2)) };
        let result = minimizer.minimize(&mut objective, &[0.0, 0.0]).unwrap();

        assert!(result.converged);
        assert!((result.point[0] - 1.0).abs() < 1e-3);
        assert!((result.point[1] + 2.0).abs() < 1e-3);
        assert!(result.value < 1e-6);
    }

    #[test]
    fn test_iteration_cap_is_respected() {
        let minimizer = NelderMead::new().with_max_iterations(3).with_tolerance(0.0);
        let mut objective = |x: &[f64]| -> Result<f64> { Ok(x.iter().map(|v| v * v).sum()) };
        let result = minimizer.minimize(&mut objective, &[5.0, 5.0, 5.0]).unwrap();

        assert_eq!(result.iterations, 3);
        assert!(!result.converged);
    }

    #[test]
    fn test_objective_error_propagates() {
        let minimizer = NelderMead::new();
        let mut calls = 0;
        let mut objective = |_: &[f64]| -> Result<f64> {
            calls += 1;
            if calls > 2 {
                Err(QuantumError::BackendFailure("lost connection".to_string()))
            } else {
                Ok(1.0)
            }
        };
        let result = minimizer.minimize(&mut objective, &[0.0, 0.0]);
        assert_eq!(
            result,
            Err(QuantumError::BackendFailure("lost connection".to_string()))
        );
    }

    #[test]
    fn test_nan_objective_rejected() {
        let minimizer = NelderMead::new();
        let mut objective = |_: &[f64]| -> Result<f64> { Ok(f64::NAN) };
        assert!(matches!(
            minimizer.minimize(&mut objective, &[0.0]),
            Err(QuantumError::NumericalInstability(_))
        ));
    }

    #[test]
    fn test_zero_dimensional_problem() {
        let minimizer = NelderMead::new();
        let mut objective = |_: &[f64]| -> Result<f64> { Ok(0.25) };
        let result = minimizer.minimize(&mut objective, &[]).unwrap();
        assert_eq!(result.value, 0.25);
        assert_eq!(result.evaluations, 1);
        assert!(result.converged);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let minimizer = NelderMead::new().with_tolerance(-1.0);
        let mut objective = |_: &[f64]| -> Result<f64> { Ok(0.0) };
        assert!(minimizer.minimize(&mut objective, &[0.0]).is_err());
    }
}
