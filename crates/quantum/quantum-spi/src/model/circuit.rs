//! Parameterized circuit model

use serde::{Deserialize, Serialize};

use crate::error::{QuantumError, Result};

/// Rotation angle: either a constant or a slot in the parameter vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Angle {
    /// Constant angle in radians
    Fixed(f64),
    /// Index into the parameter vector bound at execution time
    Param(usize),
}

impl Angle {
    /// Resolve the angle against bound parameters
    pub fn resolve(&self, parameters: &[f64]) -> Result<f64> {
        match *self {
            Angle::Fixed(theta) => Ok(theta),
            Angle::Param(index) => {
                parameters
                    .get(index)
                    .copied()
                    .ok_or(QuantumError::ParameterMismatch {
                        expected: index + 1,
                        actual: parameters.len(),
                    })
            }
        }
    }
}

/// Gate set understood by every backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    H(usize),
    X(usize),
    Rx(usize, Angle),
    Ry(usize, Angle),
    Rz(usize, Angle),
    Cx { control: usize, target: usize },
    Cz { a: usize, b: usize },
}

impl Gate {
    /// Qubits touched by this gate
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Gate::H(q) | Gate::X(q) | Gate::Rx(q, _) | Gate::Ry(q, _) | Gate::Rz(q, _) => vec![q],
            Gate::Cx { control, target } => vec![control, target],
            Gate::Cz { a, b } => vec![a, b],
        }
    }

    /// Parameter slot referenced by this gate, if any
    pub fn param_index(&self) -> Option<usize> {
        match *self {
            Gate::Rx(_, Angle::Param(i)) | Gate::Ry(_, Angle::Param(i)) | Gate::Rz(_, Angle::Param(i)) => {
                Some(i)
            }
            _ => None,
        }
    }
}

/// Ordered gate list over a fixed-width register
///
/// Qubit `k` maps to bit `k` of a basis-state index.
///
/// # Example
///
/// ```rust
/// use quantum_spi::Circuit;
///
/// let mut circuit = Circuit::new(2);
/// circuit.h(0).cx(0, 1);
/// assert_eq!(circuit.gate_count(), 2);
/// assert_eq!(circuit.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    n_qubits: usize,
    gates: Vec<Gate>,
    n_params: usize,
}

impl Circuit {
    /// Create an empty circuit
    pub fn new(n_qubits: usize) -> Self {
        Self {
            n_qubits,
            gates: Vec::new(),
            n_params: 0,
        }
    }

    /// Register width
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Number of parameters that must be bound at execution
    pub fn n_params(&self) -> usize {
        self.n_params
    }

    /// Gates in application order
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Total gate count
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Circuit depth: the longest chain of gates sharing a qubit
    pub fn depth(&self) -> usize {
        let mut levels = vec![0usize; self.n_qubits];
        for gate in &self.gates {
            let qubits = gate.qubits();
            let layer = qubits
                .iter()
                .filter_map(|&q| levels.get(q).copied())
                .max()
                .unwrap_or(0)
                + 1;
            for q in qubits {
                if let Some(level) = levels.get_mut(q) {
                    *level = layer;
                }
            }
        }
        levels.into_iter().max().unwrap_or(0)
    }

    /// Append an arbitrary gate
    pub fn push(&mut self, gate: Gate) -> &mut Self {
        if let Some(index) = gate.param_index() {
            self.n_params = self.n_params.max(index + 1);
        }
        self.gates.push(gate);
        self
    }

    pub fn h(&mut self, qubit: usize) -> &mut Self {
        self.push(Gate::H(qubit))
    }

    pub fn x(&mut self, qubit: usize) -> &mut Self {
        self.push(Gate::X(qubit))
    }

    pub fn rx(&mut self, qubit: usize, theta: f64) -> &mut Self {
        self.push(Gate::Rx(qubit, Angle::Fixed(theta)))
    }

    pub fn ry(&mut self, qubit: usize, theta: f64) -> &mut Self {
        self.push(Gate::Ry(qubit, Angle::Fixed(theta)))
    }

    pub fn rz(&mut self, qubit: usize, theta: f64) -> &mut Self {
        self.push(Gate::Rz(qubit, Angle::Fixed(theta)))
    }

    /// RY rotation bound to parameter slot `index`
    pub fn ry_param(&mut self, qubit: usize, index: usize) -> &mut Self {
        self.push(Gate::Ry(qubit, Angle::Param(index)))
    }

    /// RZ rotation bound to parameter slot `index`
    pub fn rz_param(&mut self, qubit: usize, index: usize) -> &mut Self {
        self.push(Gate::Rz(qubit, Angle::Param(index)))
    }

    pub fn cx(&mut self, control: usize, target: usize) -> &mut Self {
        self.push(Gate::Cx { control, target })
    }

    pub fn cz(&mut self, a: usize, b: usize) -> &mut Self {
        self.push(Gate::Cz { a, b })
    }

    /// Check qubit indices and parameter count before execution
    pub fn validate(&self, parameters: &[f64]) -> Result<()> {
        for gate in &self.gates {
            let qubits = gate.qubits();
            for &q in &qubits {
                if q >= self.n_qubits {
                    return Err(QuantumError::InvalidQubit {
                        qubit: q,
                        n_qubits: self.n_qubits,
                    });
                }
            }
            if qubits.len() == 2 && qubits[0] == qubits[1] {
                return Err(QuantumError::InvalidParameter {
                    name: "gate".to_string(),
                    reason: format!("two-qubit gate acts twice on qubit {}", qubits[0]),
                });
            }
        }
        if parameters.len() != self.n_params {
            return Err(QuantumError::ParameterMismatch {
                expected: self.n_params,
                actual: parameters.len(),
            });
        }
        Ok(())
    }
}
