//! Backend execution results

use num_complex::Complex64;

use crate::error::{QuantumError, Result};
use crate::model::{Pauli, PauliSum};

/// Outcome of executing a bound circuit
///
/// Simulators report the final amplitudes. When shots are requested the
/// sampled basis-state counts are attached and expectations of diagonal
/// observables are estimated from them instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    n_qubits: usize,
    amplitudes: Vec<Complex64>,
    counts: Option<Vec<u64>>,
}

impl Measurement {
    /// Exact state-vector measurement
    pub fn from_amplitudes(n_qubits: usize, amplitudes: Vec<Complex64>) -> Result<Self> {
        if amplitudes.len() != 1usize << n_qubits {
            return Err(QuantumError::DimensionMismatch {
                state: amplitudes.len().trailing_zeros() as usize,
                observable: n_qubits,
            });
        }
        Ok(Self {
            n_qubits,
            amplitudes,
            counts: None,
        })
    }

    /// Attach sampled counts, one bucket per basis state
    pub fn with_counts(mut self, counts: Vec<u64>) -> Result<Self> {
        if counts.len() != self.amplitudes.len() {
            return Err(QuantumError::DimensionMismatch {
                state: self.n_qubits,
                observable: counts.len().trailing_zeros() as usize,
            });
        }
        self.counts = Some(counts);
        Ok(self)
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn counts(&self) -> Option<&[u64]> {
        self.counts.as_deref()
    }

    /// Basis-state probabilities |ψ_i|²
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Expectation value ⟨ψ|H|ψ⟩
    ///
    /// Exact when no counts are attached; otherwise estimated from the
    /// sampled distribution, which requires a diagonal observable.
    pub fn expectation(&self, observable: &PauliSum) -> Result<f64> {
        if observable.n_qubits() != self.n_qubits {
            return Err(QuantumError::DimensionMismatch {
                state: self.n_qubits,
                observable: observable.n_qubits(),
            });
        }

        let value = match &self.counts {
            Some(counts) => self.sampled_expectation(observable, counts)?,
            None => self.exact_expectation(observable),
        };

        if !value.is_finite() {
            return Err(QuantumError::NumericalInstability(format!(
                "expectation value is {}",
                value
            )));
        }
        Ok(value)
    }

    fn exact_expectation(&self, observable: &PauliSum) -> f64 {
        let i = Complex64::new(0.0, 1.0);
        let mut total = 0.0;

        for term in observable.terms() {
            let flip = term.flip_mask();
            let mut acc = Complex64::new(0.0, 0.0);

            for (basis, amp) in self.amplitudes.iter().enumerate() {
                if amp.norm_sqr() == 0.0 {
                    continue;
                }
                // P|basis> = phase * |basis ^ flip>
                let mut phase = Complex64::new(1.0, 0.0);
                for (k, pauli) in term.paulis.iter().enumerate() {
                    let bit = (basis >> k) & 1;
                    match pauli {
                        Pauli::I | Pauli::X => {}
                        Pauli::Z => {
                            if bit == 1 {
                                phase = -phase;
                            }
                        }
                        Pauli::Y => {
                            phase *= if bit == 0 { i } else { -i };
                        }
                    }
                }
                acc += self.amplitudes[basis ^ flip].conj() * phase * *amp;
            }

            total += term.coeff * acc.re;
        }

        total
    }

    fn sampled_expectation(&self, observable: &PauliSum, counts: &[u64]) -> Result<f64> {
        if !observable.is_diagonal() {
            return Err(QuantumError::NonDiagonalObservable);
        }
        let shots: u64 = counts.iter().sum();
        if shots == 0 {
            return Err(QuantumError::NumericalInstability(
                "no shots recorded".to_string(),
            ));
        }
        let energy: f64 = counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(state, &c)| c as f64 * observable.diagonal_energy(state))
            .sum();
        Ok(energy / shots as f64)
    }
}
