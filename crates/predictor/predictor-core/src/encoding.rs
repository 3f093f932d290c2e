//! Series-to-Hamiltonian encoding
//!
//! A series is mapped onto `q = min(n, max_qubits)` qubits:
//!
//! - identity term weighted by the series mean (on the 0-1 scale)
//! - one Z term per position, weighted by that observation
//! - one ZZ term per position pair, weighted by their correlation

use predictor_spi::{PredictorError, Result};
use quantum_spi::{Pauli, PauliString, PauliSum, QuantumError};

/// Scale applied to per-position Z weights
const Z_WEIGHT: f64 = 0.1;

/// Scale applied to pairwise ZZ weights
const ZZ_WEIGHT: f64 = 0.05;

/// Problem Hamiltonian built from a historical series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEncoding {
    n_qubits: usize,
    hamiltonian: PauliSum,
}

impl SeriesEncoding {
    /// Encode `series` onto at most `max_qubits` qubits
    ///
    /// The first `q` observations drive the per-position terms; the mean
    /// and variance use the whole series.
    pub fn encode(series: &[f64], max_qubits: usize) -> Result<Self> {
        if series.is_empty() || max_qubits == 0 {
            return Err(PredictorError::InsufficientData {
                required: 1,
                actual: series.len().min(max_qubits),
            });
        }
        if series.iter().any(|v| !v.is_finite()) {
            return Err(QuantumError::InvalidParameter {
                name: "series".to_string(),
                reason: "contains non-finite values".to_string(),
            }
            .into());
        }

        let q = series.len().min(max_qubits);
        let n = series.len() as f64;
        let mean = series.iter().sum::<f64>() / n;
        let variance = series.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        let mut hamiltonian =
            PauliSum::new(q).with_term(PauliString::identity(q, mean / 100.0));

        for (i, &value) in series.iter().take(q).enumerate() {
            hamiltonian.add_term(PauliString::single(q, i, Pauli::Z, value / 100.0 * Z_WEIGHT));
        }

        for i in 0..q {
            for j in (i + 1)..q {
                let corr = pair_correlation(series[i], series[j], mean, variance);
                hamiltonian.add_term(PauliString::zz(q, i, j, corr * ZZ_WEIGHT));
            }
        }

        Ok(Self {
            n_qubits: q,
            hamiltonian,
        })
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn hamiltonian(&self) -> &PauliSum {
        &self.hamiltonian
    }

    pub fn into_hamiltonian(self) -> PauliSum {
        self.hamiltonian
    }
}

/// Standardized co-deviation of two observations, clamped to [-1, 1]
fn pair_correlation(a: f64, b: f64, mean: f64, variance: f64) -> f64 {
    if variance <= f64::EPSILON {
        return 0.0;
    }
    ((a - mean) * (b - mean) / variance).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_layout() {
        let encoding = SeriesEncoding::encode(&[10.0, 20.0, 30.0, 40.0], 3).unwrap();
        let h = encoding.hamiltonian();

        assert_eq!(encoding.n_qubits(), 3);
        // 1 identity + 3 Z + 3 ZZ
        assert_eq!(h.num_terms(), 7);
        assert!(h.is_diagonal());

        assert!(h.terms()[0].is_identity());
        assert!((h.terms()[0].coeff - 0.25).abs() < 1e-12);
        assert_eq!(h.terms()[1].label(), "ZII");
        assert!((h.terms()[1].coeff - 0.01).abs() < 1e-12);
        assert_eq!(h.terms()[4].label(), "ZZI");
    }

    #[test]
    fn test_short_series_uses_series_length() {
        let encoding = SeriesEncoding::encode(&[10.0, 20.0], 6).unwrap();
        assert_eq!(encoding.n_qubits(), 2);
        assert_eq!(encoding.hamiltonian().num_terms(), 4);
    }

    #[test]
    fn test_constant_series_has_no_coupling() {
        let encoding = SeriesEncoding::encode(&[50.0, 50.0, 50.0], 3).unwrap();
        for term in &encoding.hamiltonian().terms()[4..] {
            assert_eq!(term.coeff, 0.0);
        }
    }

    #[test]
    fn test_coefficients_bounded() {
        let encoding = SeriesEncoding::encode(&[0.0, 100.0, 0.0, 100.0, 0.0], 5).unwrap();
        for term in encoding.hamiltonian().terms() {
            assert!(term.coeff.is_finite());
            assert!(term.coeff.abs() <= 1.0);
        }
    }

    #[test]
    fn test_empty_series_rejected() {
        assert!(matches!(
            SeriesEncoding::encode(&[], 4),
            Err(PredictorError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = SeriesEncoding::encode(&[1.0, f64::INFINITY], 4).unwrap_err();
        assert!(err.is_quantum());
    }
}
