//! Qubit addressing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 0-based index of a qubit in the `q` register.
///
/// Pauli strings and encoded operators number qubits from 1 (the column in
/// the string); [`QubitId::from_position`] performs the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// Convert a 1-based Pauli-string column into a register index.
    ///
    /// Returns `None` for column 0 or a column that does not fit `u32`.
    pub fn from_position(column: usize) -> Option<Self> {
        let index = column.checked_sub(1)?;
        u32::try_from(index).ok().map(QubitId)
    }

    /// The 1-based column this qubit occupies in a Pauli string.
    pub fn position(self) -> usize {
        self.0 as usize + 1
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q[{}]", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}
