//! Pauli symbols and the per-basis encoding of a Pauli string.
//!
//! A Pauli string such as `XIZY` is decoded into three ascending lists of
//! 1-based qubit columns, one per non-identity basis:
//!
//! ```rust
//! use pauliq_ir::{Basis, EncodedOperator};
//!
//! let op = EncodedOperator::decode("XIZY", 1).unwrap();
//! assert_eq!(op.group(Basis::X), &[1]);
//! assert_eq!(op.group(Basis::Y), &[4]);
//! assert_eq!(op.group(Basis::Z), &[3]);
//! assert_eq!(op.pivot(), Some(4));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// A single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Identity operator.
    I,
    /// Pauli-X operator.
    X,
    /// Pauli-Y operator.
    Y,
    /// Pauli-Z operator.
    Z,
}

impl Pauli {
    /// Get the name of this Pauli operator.
    pub fn name(&self) -> &'static str {
        match self {
            Pauli::I => "I",
            Pauli::X => "X",
            Pauli::Y => "Y",
            Pauli::Z => "Z",
        }
    }

    /// Parse a Pauli symbol. Only upper-case `I`, `X`, `Y`, `Z` are accepted.
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'I' => Some(Pauli::I),
            'X' => Some(Pauli::X),
            'Y' => Some(Pauli::Y),
            'Z' => Some(Pauli::Z),
            _ => None,
        }
    }

    /// The rotation basis of this operator, `None` for the identity.
    pub fn basis(self) -> Option<Basis> {
        match self {
            Pauli::I => None,
            Pauli::X => Some(Basis::X),
            Pauli::Y => Some(Basis::Y),
            Pauli::Z => Some(Basis::Z),
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A non-identity Pauli basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// X basis.
    X,
    /// Y basis.
    Y,
    /// Z basis.
    Z,
}

impl Basis {
    /// All bases in synthesis order.
    pub const ALL: [Basis; 3] = [Basis::X, Basis::Y, Basis::Z];

    fn slot(self) -> usize {
        match self {
            Basis::X => 0,
            Basis::Y => 1,
            Basis::Z => 2,
        }
    }

    /// The Pauli operator of this basis.
    pub fn pauli(self) -> Pauli {
        match self {
            Basis::X => Pauli::X,
            Basis::Y => Pauli::Y,
            Basis::Z => Pauli::Z,
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pauli())
    }
}

/// A Pauli string split into ascending 1-based qubit columns per basis.
///
/// Every column appears in at most one basis; identity columns appear in
/// none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedOperator {
    groups: [Vec<usize>; 3],
}

impl EncodedOperator {
    /// Decode a Pauli string.
    ///
    /// Columns are scanned left to right, so each group is ascending.
    /// `position` is only used to label an [`IrError::UnsupportedSymbol`].
    pub fn decode(symbols: &str, position: usize) -> IrResult<Self> {
        let mut encoded = Self::default();

        for (offset, symbol) in symbols.chars().enumerate() {
            let column = offset + 1;
            let pauli = Pauli::from_char(symbol).ok_or(IrError::UnsupportedSymbol {
                position,
                symbol,
                column,
            })?;
            if let Some(basis) = pauli.basis() {
                encoded.groups[basis.slot()].push(column);
            }
        }

        Ok(encoded)
    }

    /// Build an encoded operator from explicit basis groupings.
    ///
    /// Rejects more than three groupings, a basis listed twice, column 0,
    /// non-ascending groups and columns shared between bases.
    pub fn from_groups(
        position: usize,
        groupings: impl IntoIterator<Item = (Basis, Vec<usize>)>,
    ) -> IrResult<Self> {
        let invalid = |reason: String| IrError::InvalidBasisGrouping { position, reason };

        let groupings: Vec<_> = groupings.into_iter().collect();
        if groupings.len() > Basis::ALL.len() {
            return Err(invalid(format!(
                "{} basis groupings, at most {} allowed",
                groupings.len(),
                Basis::ALL.len()
            )));
        }

        let mut seen = [false; 3];
        let mut encoded = Self::default();
        for (basis, columns) in groupings {
            if std::mem::replace(&mut seen[basis.slot()], true) {
                return Err(invalid(format!("basis {basis} listed twice")));
            }
            if columns.contains(&0) {
                return Err(invalid(format!("basis {basis} lists column 0")));
            }
            if columns.windows(2).any(|w| w[0] >= w[1]) {
                return Err(invalid(format!("basis {basis} is not strictly ascending")));
            }
            encoded.groups[basis.slot()] = columns;
        }

        for basis in Basis::ALL {
            for other in Basis::ALL.into_iter().filter(|b| *b > basis) {
                if let Some(shared) = encoded
                    .group(basis)
                    .iter()
                    .find(|q| encoded.group(other).binary_search(*q).is_ok())
                {
                    return Err(invalid(format!(
                        "column {shared} appears in bases {basis} and {other}"
                    )));
                }
            }
        }

        Ok(encoded)
    }

    /// The ascending columns acting in `basis`.
    pub fn group(&self, basis: Basis) -> &[usize] {
        &self.groups[basis.slot()]
    }

    /// Iterate over `(basis, columns)` in synthesis order X, Y, Z.
    pub fn groups(&self) -> impl Iterator<Item = (Basis, &[usize])> + '_ {
        Basis::ALL.into_iter().map(|b| (b, self.group(b)))
    }

    /// The basis acting on `column`, if any.
    pub fn basis_of(&self, column: usize) -> Option<Basis> {
        self.groups()
            .find(|(_, cols)| cols.binary_search(&column).is_ok())
            .map(|(b, _)| b)
    }

    /// The highest column touched by any basis, `None` for the identity.
    pub fn pivot(&self) -> Option<usize> {
        // Groups are ascending, so the last element is each group's maximum.
        self.groups.iter().filter_map(|g| g.last().copied()).max()
    }

    /// Number of non-identity columns.
    pub fn support_len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Check if the operator is the identity on every qubit.
    pub fn is_identity(&self) -> bool {
        self.support_len() == 0
    }

    /// Re-derive the Pauli string, padding with `I` up to `num_qubits`.
    pub fn to_symbols(&self, num_qubits: usize) -> String {
        let len = num_qubits.max(self.pivot().unwrap_or(0));
        let mut symbols = vec![Pauli::I; len];
        for (basis, columns) in self.groups() {
            for &column in columns {
                symbols[column - 1] = basis.pauli();
            }
        }
        symbols.iter().map(Pauli::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_groups() {
        let op = EncodedOperator::decode("XYZIXZ", 1).unwrap();
        assert_eq!(op.group(Basis::X), &[1, 5]);
        assert_eq!(op.group(Basis::Y), &[2]);
        assert_eq!(op.group(Basis::Z), &[3, 6]);
        assert_eq!(op.support_len(), 5);
        assert_eq!(op.pivot(), Some(6));
    }

    #[test]
    fn test_decode_identity() {
        let op = EncodedOperator::decode("IIII", 3).unwrap();
        assert!(op.is_identity());
        assert_eq!(op.pivot(), None);
        assert_eq!(op.to_symbols(4), "IIII");
    }

    #[test]
    fn test_decode_unsupported_symbol() {
        let err = EncodedOperator::decode("XQZ", 12).unwrap_err();
        match err {
            IrError::UnsupportedSymbol {
                position,
                symbol,
                column,
            } => {
                assert_eq!(position, 12);
                assert_eq!(symbol, 'Q');
                assert_eq!(column, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lowercase_is_unsupported() {
        assert!(EncodedOperator::decode("xz", 1).is_err());
    }

    #[test]
    fn test_basis_of() {
        let op = EncodedOperator::decode("ZIY", 1).unwrap();
        assert_eq!(op.basis_of(1), Some(Basis::Z));
        assert_eq!(op.basis_of(2), None);
        assert_eq!(op.basis_of(3), Some(Basis::Y));
    }

    #[test]
    fn test_round_trip() {
        for s in ["X", "IZ", "XYZI", "YYIXZZI"] {
            let op = EncodedOperator::decode(s, 1).unwrap();
            assert_eq!(op.to_symbols(s.len()), s);
        }
    }

    #[test]
    fn test_from_groups_matches_decode() {
        let built =
            EncodedOperator::from_groups(1, [(Basis::X, vec![1]), (Basis::Z, vec![3])]).unwrap();
        assert_eq!(built, EncodedOperator::decode("XIZ", 1).unwrap());
    }

    #[test]
    fn test_from_groups_too_many() {
        let err = EncodedOperator::from_groups(
            4,
            [
                (Basis::X, vec![1]),
                (Basis::Y, vec![2]),
                (Basis::Z, vec![3]),
                (Basis::X, vec![4]),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IrError::InvalidBasisGrouping { position: 4, .. }
        ));
    }

    #[test]
    fn test_from_groups_rejects_overlap_and_order() {
        assert!(
            EncodedOperator::from_groups(1, [(Basis::X, vec![2]), (Basis::Z, vec![2])]).is_err()
        );
        assert!(EncodedOperator::from_groups(1, [(Basis::X, vec![3, 1])]).is_err());
        assert!(EncodedOperator::from_groups(1, [(Basis::Y, vec![0])]).is_err());
        assert!(
            EncodedOperator::from_groups(1, [(Basis::Y, vec![1]), (Basis::Y, vec![2])]).is_err()
        );
    }
}
