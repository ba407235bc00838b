//! Validated operator terms.

use serde::Serialize;

use crate::error::{IrError, IrResult};
use crate::pauli::EncodedOperator;

/// One term of the input: `coefficient * P` for a Pauli string `P`.
///
/// Records are immutable once built. [`OperatorRecord::new`] enforces the
/// per-term invariants: a non-empty Pauli string, a finite non-zero
/// coefficient and a positive dependency parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorRecord {
    position: usize,
    symbols: String,
    coefficient: f64,
    parameter: u64,
}

impl OperatorRecord {
    /// Create a record.
    ///
    /// A `parameter` of `0` marks the term as independent and is replaced by
    /// its own `position`.
    pub fn new(
        position: usize,
        symbols: impl Into<String>,
        coefficient: f64,
        parameter: u64,
    ) -> IrResult<Self> {
        let symbols = symbols.into();

        if position == 0 {
            return Err(IrError::WrongFormat {
                position,
                reason: "positions start at 1".into(),
            });
        }
        if symbols.is_empty() {
            return Err(IrError::WrongFormat {
                position,
                reason: "no operator provided".into(),
            });
        }
        if !coefficient.is_finite() {
            return Err(IrError::WrongFormat {
                position,
                reason: format!("coefficient {coefficient} is not finite"),
            });
        }
        if coefficient == 0.0 {
            return Err(IrError::ZeroCoefficient { position });
        }

        let parameter = if parameter == 0 {
            position as u64
        } else {
            parameter
        };

        Ok(Self {
            position,
            symbols,
            coefficient,
            parameter,
        })
    }

    /// 1-based position of the term in the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The Pauli string.
    pub fn symbols(&self) -> &str {
        &self.symbols
    }

    /// Number of symbols (qubits) in the Pauli string.
    pub fn num_symbols(&self) -> usize {
        self.symbols.chars().count()
    }

    /// The coefficient scaling the rotation angle.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// The dependency parameter, emitted as `$[parameter]`.
    pub fn parameter(&self) -> u64 {
        self.parameter
    }

    /// Whether the term owns its parameter (it was given as `0`, or names itself).
    pub fn is_independent(&self) -> bool {
        self.parameter == self.position as u64
    }

    /// Decode the Pauli string of this term.
    pub fn encode(&self) -> IrResult<EncodedOperator> {
        EncodedOperator::decode(&self.symbols, self.position)
    }
}

/// An ordered collection of records sharing one register size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperatorSet {
    num_qubits: usize,
    records: Vec<OperatorRecord>,
}

impl OperatorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from records, checking register sizes.
    pub fn from_records(records: impl IntoIterator<Item = OperatorRecord>) -> IrResult<Self> {
        let mut set = Self::new();
        for record in records {
            set.push(record)?;
        }
        Ok(set)
    }

    /// Build a set with an explicit register size and no length checks.
    ///
    /// Callers are responsible for the records matching `num_qubits`; the
    /// synthesizer still rejects any record touching a qubit beyond it.
    pub fn with_register(num_qubits: usize, records: Vec<OperatorRecord>) -> Self {
        Self {
            num_qubits,
            records,
        }
    }

    /// Append a record.
    ///
    /// The first record fixes the register size; every later record must
    /// have the same number of symbols.
    pub fn push(&mut self, record: OperatorRecord) -> IrResult<()> {
        let got = record.num_symbols();
        if self.records.is_empty() {
            self.num_qubits = got;
        } else if got != self.num_qubits {
            return Err(IrError::LengthMismatch {
                position: record.position(),
                expected: self.num_qubits,
                got,
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Register size shared by all records.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The records in input order.
    pub fn records(&self) -> &[OperatorRecord] {
        &self.records
    }

    /// Get the number of terms.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the set has no terms.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, OperatorRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a OperatorSet {
    type Item = &'a OperatorRecord;
    type IntoIter = std::slice::Iter<'a, OperatorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
