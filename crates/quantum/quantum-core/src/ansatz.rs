//! Layered RY/CX ansatz
//!
//! An initial RY layer followed by `reps` repetitions of a nearest-neighbour
//! CX chain and another RY layer. Every RY angle is a free parameter, so the
//! parameter count is `n_qubits * (reps + 1)` and the circuit shape depends
//! only on the register width and `reps`.

use quantum_spi::Circuit;
use std::f64::consts::PI;

/// Build layered ansatz circuits and their starting point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsatzBuilder {
    n_qubits: usize,
    reps: usize,
}

impl AnsatzBuilder {
    pub fn new(n_qubits: usize) -> Self {
        Self { n_qubits, reps: 2 }
    }

    /// Number of CX + RY repetitions after the first rotation layer
    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn reps(&self) -> usize {
        self.reps
    }

    pub fn n_params(&self) -> usize {
        self.n_qubits * (self.reps + 1)
    }

    /// Parameterized circuit; slot `layer * n_qubits + qubit` drives each RY
    pub fn build(&self) -> Circuit {
        let mut circuit = Circuit::new(self.n_qubits);

        for qubit in 0..self.n_qubits {
            circuit.ry_param(qubit, qubit);
        }

        for layer in 1..=self.reps {
            for qubit in 0..self.n_qubits.saturating_sub(1) {
                circuit.cx(qubit, qubit + 1);
            }
            for qubit in 0..self.n_qubits {
                circuit.ry_param(qubit, layer * self.n_qubits + qubit);
            }
        }

        circuit
    }

    /// Staggered starting angles: π/4·(q+1) on the first layer, π/3·l after
    pub fn initial_parameters(&self) -> Vec<f64> {
        let mut params = Vec::with_capacity(self.n_params());
        params.extend((0..self.n_qubits).map(|q| PI / 4.0 * (q + 1) as f64));
        for layer in 1..=self.reps {
            params.extend(std::iter::repeat(PI / 3.0 * layer as f64).take(self.n_qubits));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_count() {
        let builder = AnsatzBuilder::new(4).with_reps(2);
        let circuit = builder.build();
        assert_eq!(builder.n_params(), 12);
        assert_eq!(circuit.n_params(), 12);
        assert_eq!(builder.initial_parameters().len(), 12);
        assert!(circuit.validate(&builder.initial_parameters()).is_ok());
    }

    #[test]
    fn test_gate_count() {
        let q = 5;
        let reps = 3;
        let circuit = AnsatzBuilder::new(q).with_reps(reps).build();
        assert_eq!(circuit.gate_count(), q * (reps + 1) + reps * (q - 1));
    }

    #[test]
    fn test_depth_single_qubit() {
        let circuit = AnsatzBuilder::new(1).with_reps(2).build();
        assert_eq!(circuit.depth(), 3);
    }

    #[test]
    fn test_depth_three_qubits_one_rep() {
        // RY | CX(0,1) CX(1,2) | RY
        let circuit = AnsatzBuilder::new(3).with_reps(1).build();
        assert_eq!(circuit.depth(), 4);
    }

    #[test]
    fn test_initial_angles() {
        let params = AnsatzBuilder::new(2).with_reps(2).initial_parameters();
        let expected = [PI / 4.0, PI / 2.0, PI / 3.0, PI / 3.0, 2.0 * PI / 3.0, 2.0 * PI / 3.0];
        for (got, want) in params.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_shape_depends_only_on_width_and_reps() {
        let a = AnsatzBuilder::new(3).with_reps(2).build();
        let b = AnsatzBuilder::new(3).with_reps(2).build();
        assert_eq!(a, b);
    }
}
