//! Gate-level instructions produced by term synthesis.

use serde::{Deserialize, Serialize};

use crate::qubit::QubitId;

/// Rotation angle of a single-qubit gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Angle {
    /// π/2.
    HalfPi,
    /// -π/2.
    NegHalfPi,
    /// The symbolic term angle `multiplier * coefficient * $[parameter]`.
    Term {
        /// Global scale applied to every term.
        multiplier: f64,
        /// Coefficient of the term.
        coefficient: f64,
        /// Dependency parameter referenced as `$[parameter]`.
        parameter: u64,
    },
}

/// Gates used by the synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Rotation around X axis.
    Rx(Angle),
    /// Rotation around Y axis.
    Ry(Angle),
    /// Rotation around Z axis.
    Rz(Angle),
    /// Controlled-X (CNOT) gate.
    Cx,
}

impl Gate {
    /// The OpenQASM name of this gate.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Rx(_) => "rx",
            Gate::Ry(_) => "ry",
            Gate::Rz(_) => "rz",
            Gate::Cx => "cx",
        }
    }

    /// The rotation angle, `None` for `cx`.
    pub fn angle(&self) -> Option<&Angle> {
        match self {
            Gate::Rx(a) | Gate::Ry(a) | Gate::Rz(a) => Some(a),
            Gate::Cx => None,
        }
    }

    /// Number of qubits the gate acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            Gate::Cx => 2,
            _ => 1,
        }
    }
}

/// A gate applied to its operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: Gate,
    /// Operands; for `cx` the control comes first.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a single-qubit gate instruction.
    pub fn single(gate: Gate, qubit: QubitId) -> Self {
        debug_assert_eq!(gate.num_qubits(), 1);
        Self {
            gate,
            qubits: vec![qubit],
        }
    }

    /// Create a CNOT from `control` onto `target`.
    pub fn cx(control: QubitId, target: QubitId) -> Self {
        Self {
            gate: Gate::Cx,
            qubits: vec![control, target],
        }
    }

    /// The OpenQASM name of the gate.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }

    /// Check if this is an entangling (two-qubit) instruction.
    pub fn is_entangling(&self) -> bool {
        matches!(self.gate, Gate::Cx)
    }
}

/// The synthesized gate sequence of one term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermCircuit {
    /// Position of the source term.
    pub position: usize,
    /// Qubit carrying the central `rz`.
    pub pivot: QubitId,
    /// Gates in execution order.
    pub instructions: Vec<Instruction>,
}

impl TermCircuit {
    /// Number of `cx` instructions.
    pub fn num_entangling(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_entangling()).count()
    }

    /// Check if any instruction acts on `qubit`.
    pub fn touches(&self, qubit: QubitId) -> bool {
        self.instructions.iter().any(|i| i.qubits.contains(&qubit))
    }

    /// Get the number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
