//! Pauli operators and weighted sums of Pauli strings

use serde::{Deserialize, Serialize};

/// Single-qubit Pauli operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

/// Tensor product of Paulis with a real coefficient
///
/// `paulis[k]` acts on qubit `k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliString {
    pub paulis: Vec<Pauli>,
    pub coeff: f64,
}

impl PauliString {
    pub fn new(paulis: Vec<Pauli>, coeff: f64) -> Self {
        Self { paulis, coeff }
    }

    /// Identity on `n_qubits` qubits
    pub fn identity(n_qubits: usize, coeff: f64) -> Self {
        Self {
            paulis: vec![Pauli::I; n_qubits],
            coeff,
        }
    }

    /// One non-identity Pauli on `qubit`
    pub fn single(n_qubits: usize, qubit: usize, pauli: Pauli, coeff: f64) -> Self {
        let mut paulis = vec![Pauli::I; n_qubits];
        if let Some(slot) = paulis.get_mut(qubit) {
            *slot = pauli;
        }
        Self { paulis, coeff }
    }

    /// Z⊗Z coupling between `q1` and `q2`
    pub fn zz(n_qubits: usize, q1: usize, q2: usize, coeff: f64) -> Self {
        let mut paulis = vec![Pauli::I; n_qubits];
        for q in [q1, q2] {
            if let Some(slot) = paulis.get_mut(q) {
                *slot = Pauli::Z;
            }
        }
        Self { paulis, coeff }
    }

    pub fn n_qubits(&self) -> usize {
        self.paulis.len()
    }

    pub fn is_identity(&self) -> bool {
        self.paulis.iter().all(|&p| p == Pauli::I)
    }

    /// True when the string only contains I and Z
    pub fn is_diagonal(&self) -> bool {
        self.paulis.iter().all(|&p| matches!(p, Pauli::I | Pauli::Z))
    }

    /// Bit mask of qubits flipped by X or Y
    pub fn flip_mask(&self) -> usize {
        self.paulis
            .iter()
            .enumerate()
            .filter(|(_, &p)| matches!(p, Pauli::X | Pauli::Y))
            .fold(0, |mask, (k, _)| mask | (1 << k))
    }

    /// Eigenvalue of a diagonal string on a computational basis state
    pub fn diagonal_eigenvalue(&self, basis_state: usize) -> f64 {
        let parity = self
            .paulis
            .iter()
            .enumerate()
            .filter(|(k, &p)| p == Pauli::Z && (basis_state >> k) & 1 == 1)
            .count();
        if parity % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Render as a label such as `IZZI` (qubit 0 first)
    pub fn label(&self) -> String {
        self.paulis
            .iter()
            .map(|p| match p {
                Pauli::I => 'I',
                Pauli::X => 'X',
                Pauli::Y => 'Y',
                Pauli::Z => 'Z',
            })
            .collect()
    }
}

/// Weighted sum of Pauli strings, the problem Hamiltonian of a VQE run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliSum {
    n_qubits: usize,
    terms: Vec<PauliString>,
}

impl PauliSum {
    pub fn new(n_qubits: usize) -> Self {
        Self {
            n_qubits,
            terms: Vec::new(),
        }
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn terms(&self) -> &[PauliString] {
        &self.terms
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn add_term(&mut self, term: PauliString) {
        self.terms.push(term);
    }

    pub fn with_term(mut self, term: PauliString) -> Self {
        self.terms.push(term);
        self
    }

    pub fn is_diagonal(&self) -> bool {
        self.terms.iter().all(PauliString::is_diagonal)
    }

    /// Energy of a basis state; only meaningful for diagonal sums
    pub fn diagonal_energy(&self, basis_state: usize) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coeff * t.diagonal_eigenvalue(basis_state))
            .sum()
    }

    /// Exhaustive ground state of a diagonal sum: `(basis_state, energy)`
    pub fn ground_state_brute_force(&self) -> (usize, f64) {
        (0..1usize << self.n_qubits)
            .map(|state| (state, self.diagonal_energy(state)))
            .fold((0, f64::INFINITY), |best, candidate| {
                if candidate.1 < best.1 {
                    candidate
                } else {
                    best
                }
            })
    }
}
