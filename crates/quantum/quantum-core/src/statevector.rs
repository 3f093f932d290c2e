//! Exact state-vector simulator
//!
//! Amplitudes are stored densely, so memory grows as 2^n. Qubit `k` maps to
//! bit `k` of the basis index.

use num_complex::Complex64;
use quantum_spi::{Circuit, Gate, Measurement, QuantumBackend, QuantumError, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::FRAC_1_SQRT_2;
use tracing::trace;

/// Widest register the simulator accepts
pub const MAX_QUBITS: usize = 20;

type Matrix2 = [[Complex64; 2]; 2];

/// Local simulator backend
///
/// By default `execute` returns exact amplitudes. With
/// [`with_shots`](StatevectorBackend::with_shots) the final state is also
/// sampled, and expectation values of diagonal observables are estimated
/// from the counts.
#[derive(Debug, Clone)]
pub struct StatevectorBackend {
    max_qubits: usize,
    shots: Option<(u64, u64)>,
}

impl StatevectorBackend {
    pub fn new() -> Self {
        Self {
            max_qubits: MAX_QUBITS,
            shots: None,
        }
    }

    /// Limit the register width below [`MAX_QUBITS`]
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits.min(MAX_QUBITS);
        self
    }

    /// Sample `shots` measurements per execution using a seeded RNG
    pub fn with_shots(mut self, shots: u64, seed: u64) -> Self {
        self.shots = Some((shots, seed));
        self
    }

    fn simulate(&self, circuit: &Circuit, parameters: &[f64]) -> Result<Vec<Complex64>> {
        let mut state = vec![Complex64::new(0.0, 0.0); 1usize << circuit.n_qubits()];
        state[0] = Complex64::new(1.0, 0.0);

        for gate in circuit.gates() {
            match *gate {
                Gate::H(q) => {
                    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                    apply_single(&mut state, q, [[h, h], [h, -h]]);
                }
                Gate::X(q) => {
                    let zero = Complex64::new(0.0, 0.0);
                    let one = Complex64::new(1.0, 0.0);
                    apply_single(&mut state, q, [[zero, one], [one, zero]]);
                }
                Gate::Rx(q, angle) => {
                    let theta = angle.resolve(parameters)?;
                    let c = Complex64::new((theta / 2.0).cos(), 0.0);
                    let s = Complex64::new(0.0, -(theta / 2.0).sin());
                    apply_single(&mut state, q, [[c, s], [s, c]]);
                }
                Gate::Ry(q, angle) => {
                    let theta = angle.resolve(parameters)?;
                    let c = Complex64::new((theta / 2.0).cos(), 0.0);
                    let s = Complex64::new((theta / 2.0).sin(), 0.0);
                    apply_single(&mut state, q, [[c, -s], [s, c]]);
                }
                Gate::Rz(q, angle) => {
                    let theta = angle.resolve(parameters)?;
                    let zero = Complex64::new(0.0, 0.0);
                    let minus = Complex64::from_polar(1.0, -theta / 2.0);
                    let plus = Complex64::from_polar(1.0, theta / 2.0);
                    apply_single(&mut state, q, [[minus, zero], [zero, plus]]);
                }
                Gate::Cx { control, target } => {
                    let (c, t) = (1usize << control, 1usize << target);
                    for i in 0..state.len() {
                        if i & c != 0 && i & t == 0 {
                            state.swap(i, i | t);
                        }
                    }
                }
                Gate::Cz { a, b } => {
                    let mask = (1usize << a) | (1usize << b);
                    for (i, amp) in state.iter_mut().enumerate() {
                        if i & mask == mask {
                            *amp = -*amp;
                        }
                    }
                }
            }
        }

        Ok(state)
    }
}

impl Default for StatevectorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantumBackend for StatevectorBackend {
    fn name(&self) -> &str {
        "statevector"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn max_qubits(&self) -> usize {
        self.max_qubits
    }

    fn execute(&self, circuit: &Circuit, parameters: &[f64]) -> Result<Measurement> {
        if circuit.n_qubits() > self.max_qubits {
            return Err(QuantumError::TooManyQubits {
                requested: circuit.n_qubits(),
                max: self.max_qubits,
            });
        }
        circuit.validate(parameters)?;

        let amplitudes = self.simulate(circuit, parameters)?;
        let measurement = Measurement::from_amplitudes(circuit.n_qubits(), amplitudes)?;

        match self.shots {
            None => Ok(measurement),
            Some((shots, seed)) => {
                let counts = sample_counts(&measurement.probabilities(), shots, seed)?;
                trace!(shots, seed, "sampled measurement counts");
                measurement.with_counts(counts)
            }
        }
    }
}

fn apply_single(state: &mut [Complex64], qubit: usize, m: Matrix2) {
    let bit = 1usize << qubit;
    for i in 0..state.len() {
        if i & bit == 0 {
            let j = i | bit;
            let (a, b) = (state[i], state[j]);
            state[i] = m[0][0] * a + m[0][1] * b;
            state[j] = m[1][0] * a + m[1][1] * b;
        }
    }
}

fn sample_counts(probabilities: &[f64], shots: u64, seed: u64) -> Result<Vec<u64>> {
    let distribution = WeightedIndex::new(probabilities)
        .map_err(|e| QuantumError::BackendFailure(format!("cannot sample state: {}", e)))?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = vec![0u64; probabilities.len()];
    for _ in 0..shots {
        counts[distribution.sample(&mut rng)] += 1;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantum_spi::{Pauli, PauliString, PauliSum};
    use std::f64::consts::PI;

    fn z(n: usize, q: usize) -> PauliSum {
        PauliSum::new(n).with_term(PauliString::single(n, q, Pauli::Z, 1.0))
    }

    #[test]
    fn test_initial_state_is_all_zeros() {
        let backend = StatevectorBackend::new();
        let m = backend.execute(&Circuit::new(2), &[]).unwrap();
        assert_eq!(m.probabilities(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_bell_state() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).cx(0, 1);
        let probs = StatevectorBackend::new()
            .execute(&circuit, &[])
            .unwrap()
            .probabilities();
        assert!((probs[0b00] - 0.5).abs() < 1e-12);
        assert!((probs[0b11] - 0.5).abs() < 1e-12);
        assert!(probs[0b01].abs() < 1e-12);
        assert!(probs[0b10].abs() < 1e-12);
    }

    #[test]
    fn test_ry_rotation_expectation() {
        // <Z> after RY(theta) is cos(theta)
        let backend = StatevectorBackend::new();
        for &theta in &[0.0, 0.3, PI / 2.0, 2.0, PI] {
            let mut circuit = Circuit::new(1);
            circuit.ry_param(0, 0);
            let value = backend
                .execute(&circuit, &[theta])
                .unwrap()
                .expectation(&z(1, 0))
                .unwrap();
            assert!((value - theta.cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rx_and_rz_preserve_norm() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).rx(1, 0.7).rz(0, 1.3).cz(0, 1).rx(0, -0.4);
        let total: f64 = StatevectorBackend::new()
            .execute(&circuit, &[])
            .unwrap()
            .probabilities()
            .iter()
            .sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_x_flips_qubit() {
        let mut circuit = Circuit::new(3);
        circuit.x(1);
        let probs = StatevectorBackend::new()
            .execute(&circuit, &[])
            .unwrap()
            .probabilities();
        assert!((probs[0b010] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_too_many_qubits_rejected() {
        let backend = StatevectorBackend::new().with_max_qubits(2);
        let result = backend.execute(&Circuit::new(3), &[]);
        assert_eq!(
            result,
            Err(QuantumError::TooManyQubits {
                requested: 3,
                max: 2
            })
        );
    }

    #[test]
    fn test_max_qubits_capped() {
        let backend = StatevectorBackend::new().with_max_qubits(64);
        assert_eq!(backend.max_qubits(), MAX_QUBITS);
    }

    #[test]
    fn test_parameter_mismatch_rejected() {
        let mut circuit = Circuit::new(1);
        circuit.ry_param(0, 0);
        let result = StatevectorBackend::new().execute(&circuit, &[]);
        assert!(matches!(
            result,
            Err(QuantumError::ParameterMismatch { .. })
        ));
    }

    #[test]
    fn test_shots_on_basis_state_are_exact() {
        let mut circuit = Circuit::new(1);
        circuit.x(0);
        let m = StatevectorBackend::new()
            .with_shots(1000, 7)
            .execute(&circuit, &[])
            .unwrap();
        assert_eq!(m.counts(), Some(&[0u64, 1000][..]));
        assert_eq!(m.expectation(&z(1, 0)).unwrap(), -1.0);
    }

    #[test]
    fn test_shots_are_seeded() {
        let mut circuit = Circuit::new(1);
        circuit.h(0);
        let backend = StatevectorBackend::new().with_shots(2000, 42);
        let first = backend.execute(&circuit, &[]).unwrap();
        let second = backend.execute(&circuit, &[]).unwrap();
        assert_eq!(first.counts(), second.counts());

        let estimate = first.expectation(&z(1, 0)).unwrap();
        assert!(estimate.abs() < 0.15);
    }
}
