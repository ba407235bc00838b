//! Pivot selection and gate synthesis for a single Pauli term.
//!
//! A term `c * P` becomes one `rz` on the pivot (the highest touched qubit)
//! conjugated by a CNOT ladder onto the pivot and by basis changes that map
//! X and Y onto Z:
//!
//! ```text
//! [pivot in] [in(qk) cx(qk,p)] ... [in(q1) cx(q1,p)] rz(p)
//!            [cx(q1,p) out(q1)] ... [cx(qk,p) out(qk)] [pivot out]
//! ```
//!
//! Non-pivot qubits are folded in X, Y, Z order and ascending column, each
//! one wrapping everything built so far. The pivot's own basis change is
//! the outermost layer: a rotation on the pivot does not commute with a
//! `cx` targeting it, so it must precede every such `cx` and be undone after
//! all of them.

use std::iter;

use pauliq_ir::{
    Angle, Basis, EncodedOperator, Gate, Instruction, IrError, OperatorRecord, QubitId,
    TermCircuit,
};

use crate::error::CompileResult;

/// Synthesize the gate sequence of one term.
///
/// `num_qubits` is the register size; a term touching a column beyond it is
/// rejected rather than emitted against a missing qubit.
///
/// # Errors
///
/// - [`IrError::EmptyOperator`] if the term acts on no qubit.
/// - [`IrError::QubitOutOfRange`] if the pivot lies outside the register.
pub fn synthesize(
    record: &OperatorRecord,
    encoded: &EncodedOperator,
    num_qubits: usize,
    multiplier: f64,
) -> CompileResult<TermCircuit> {
    let position = record.position();
    let pivot_column = encoded
        .pivot()
        .ok_or(IrError::EmptyOperator { position })?;
    let out_of_range = || IrError::QubitOutOfRange {
        position,
        qubit: pivot_column,
        num_qubits,
    };
    if pivot_column > num_qubits {
        return Err(out_of_range().into());
    }
    let pivot = QubitId::from_position(pivot_column).ok_or_else(out_of_range)?;

    let center = Instruction::single(
        Gate::Rz(Angle::Term {
            multiplier,
            coefficient: record.coefficient(),
            parameter: record.parameter(),
        }),
        pivot,
    );

    // `prefix` is stored innermost-first and reversed at the end.
    let mut prefix = Vec::with_capacity(2 * encoded.support_len());
    let mut suffix = Vec::with_capacity(2 * encoded.support_len());
    let mut pivot_change = None;

    for (basis, columns) in encoded.groups() {
        for &column in columns {
            // Every column is <= pivot_column <= num_qubits here.
            let qubit = QubitId::from_position(column).ok_or_else(out_of_range)?;
            let change = basis_change(basis, qubit);

            if qubit == pivot {
                pivot_change = change;
                continue;
            }

            prefix.push(Instruction::cx(qubit, pivot));
            suffix.push(Instruction::cx(qubit, pivot));
            if let Some((enter, leave)) = change {
                prefix.push(enter);
                suffix.push(leave);
            }
        }
    }

    if let Some((enter, leave)) = pivot_change {
        prefix.push(enter);
        suffix.push(leave);
    }

    let instructions = prefix
        .into_iter()
        .rev()
        .chain(iter::once(center))
        .chain(suffix)
        .collect();

    Ok(TermCircuit {
        position,
        pivot,
        instructions,
    })
}

/// The rotations taking `basis` to Z and back on `qubit`; none for Z.
fn basis_change(basis: Basis, qubit: QubitId) -> Option<(Instruction, Instruction)> {
    match basis {
        Basis::X => Some((
            Instruction::single(Gate::Ry(Angle::HalfPi), qubit),
            Instruction::single(Gate::Ry(Angle::NegHalfPi), qubit),
        )),
        Basis::Y => Some((
            Instruction::single(Gate::Rx(Angle::NegHalfPi), qubit),
            Instruction::single(Gate::Rx(Angle::HalfPi), qubit),
        )),
        Basis::Z => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(symbols: &str, coefficient: f64, parameter: u64) -> TermCircuit {
        let record = OperatorRecord::new(1, symbols, coefficient, parameter).unwrap();
        let encoded = record.encode().unwrap();
        synthesize(&record, &encoded, symbols.len(), 0.5).unwrap()
    }

    fn names(circuit: &TermCircuit) -> Vec<String> {
        circuit
            .instructions
            .iter()
            .map(|i| {
                let qubits: Vec<_> = i.qubits.iter().map(|q| q.0.to_string()).collect();
                format!("{}:{}", i.name(), qubits.join(","))
            })
            .collect()
    }

    #[test]
    fn test_xiz() {
        let circuit = lower("XIZ", 2.0, 0);
        assert_eq!(circuit.pivot, QubitId(2));
        assert_eq!(
            names(&circuit),
            ["ry:0", "cx:0,2", "rz:2", "cx:0,2", "ry:0"]
        );
        assert_eq!(
            circuit.instructions[0].gate,
            Gate::Ry(Angle::HalfPi)
        );
        assert_eq!(
            circuit.instructions[4].gate,
            Gate::Ry(Angle::NegHalfPi)
        );
        assert_eq!(
            circuit.instructions[2].gate,
            Gate::Rz(Angle::Term {
                multiplier: 0.5,
                coefficient: 2.0,
                parameter: 1,
            })
        );
        assert!(!circuit.touches(QubitId(1)));
    }

    #[test]
    fn test_single_z_is_bare_rotation() {
        let circuit = lower("IIZ", 1.0, 0);
        assert_eq!(names(&circuit), ["rz:2"]);
    }

    #[test]
    fn test_pivot_basis_change_is_outermost() {
        // Pivot q[2] in Y, q[0] in X, q[1] in Z.
        let circuit = lower("XZY", 1.0, 0);
        assert_eq!(
            names(&circuit),
            [
                "rx:2", "cx:1,2", "ry:0", "cx:0,2", "rz:2", "cx:0,2", "ry:0", "cx:1,2", "rx:2"
            ]
        );
        assert_eq!(circuit.instructions[0].gate, Gate::Rx(Angle::NegHalfPi));
        assert_eq!(circuit.instructions[8].gate, Gate::Rx(Angle::HalfPi));
    }

    #[test]
    fn test_earlier_qubits_are_innermost() {
        let circuit = lower("ZZZ", 1.0, 0);
        assert_eq!(
            names(&circuit),
            ["cx:1,2", "cx:0,2", "rz:2", "cx:0,2", "cx:1,2"]
        );
    }

    #[test]
    fn test_y_bracket() {
        let circuit = lower("YX", 1.0, 0);
        assert_eq!(
            names(&circuit),
            ["ry:1", "rx:0", "cx:0,1", "rz:1", "cx:0,1", "rx:0", "ry:1"]
        );
        assert_eq!(circuit.instructions[1].gate, Gate::Rx(Angle::NegHalfPi));
        assert_eq!(circuit.instructions[5].gate, Gate::Rx(Angle::HalfPi));
    }

    #[test]
    fn test_identity_is_empty_operator() {
        let record = OperatorRecord::new(6, "III", 1.0, 0).unwrap();
        let encoded = record.encode().unwrap();
        let err = synthesize(&record, &encoded, 3, 0.5).unwrap_err();
        assert_eq!(err.position(), Some(6));
        assert!(matches!(
            err,
            crate::CompileError::Ir(IrError::EmptyOperator { position: 6 })
        ));
    }

    #[test]
    fn test_record_longer_than_register() {
        let record = OperatorRecord::new(2, "XIZZ", 1.0, 0).unwrap();
        let encoded = record.encode().unwrap();
        let err = synthesize(&record, &encoded, 3, 0.5).unwrap_err();
        assert!(matches!(
            err,
            crate::CompileError::Ir(IrError::QubitOutOfRange {
                position: 2,
                qubit: 4,
                num_qubits: 3
            })
        ));
    }
}
