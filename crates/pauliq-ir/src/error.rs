//! Error types for the IR crate.

use thiserror::Error;

/// Errors raised while reading, validating or decoding operator terms.
///
/// Every term-level variant carries the 1-based position (input line) of the
/// offending term so diagnostics can point back at the source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A character outside `{I, X, Y, Z}` in a Pauli string.
    #[error("line {position}: unsupported Pauli symbol '{symbol}' at column {column}")]
    UnsupportedSymbol {
        /// Position of the term.
        position: usize,
        /// The offending character.
        symbol: char,
        /// 1-based column of the character within the Pauli string.
        column: usize,
    },

    /// The term acts on no qubit (identity everywhere, or an empty string).
    #[error("line {position}: operator acts on no qubit")]
    EmptyOperator {
        /// Position of the term.
        position: usize,
    },

    /// The basis groups of an encoded operator are inconsistent.
    #[error("line {position}: invalid basis grouping: {reason}")]
    InvalidBasisGrouping {
        /// Position of the term.
        position: usize,
        /// What is wrong with the grouping.
        reason: String,
    },

    /// A term touches a qubit beyond the register.
    #[error("line {position}: qubit {qubit} is outside a register of {num_qubits} qubits")]
    QubitOutOfRange {
        /// Position of the term.
        position: usize,
        /// 1-based index of the qubit.
        qubit: usize,
        /// Register size.
        num_qubits: usize,
    },

    /// Pauli string length differs from the register size set by the first term.
    #[error("line {position}: Pauli string has {got} symbols, expected {expected}")]
    LengthMismatch {
        /// Position of the term.
        position: usize,
        /// Register size.
        expected: usize,
        /// Length of this term.
        got: usize,
    },

    /// The coefficient is zero.
    #[error("line {position}: zero coefficient")]
    ZeroCoefficient {
        /// Position of the term.
        position: usize,
    },

    /// The dependency parameter is negative.
    #[error("line {position}: negative parameter {value}")]
    NegativeParameter {
        /// Position of the term.
        position: usize,
        /// The parameter as written.
        value: String,
    },

    /// The dependency parameter does not fit an unsigned 64-bit integer.
    #[error("line {position}: parameter {value} out of bounds")]
    ParameterOutOfBounds {
        /// Position of the term.
        position: usize,
        /// The parameter as written.
        value: String,
    },

    /// The line is not of the form `<pauli> <coefficient> <parameter>`.
    #[error("line {position}: wrong format: {reason}")]
    WrongFormat {
        /// Position of the term.
        position: usize,
        /// Which field is missing or malformed.
        reason: String,
    },

    /// The input could not be read.
    #[error("cannot read {path}")]
    Io {
        /// Path of the input file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl IrError {
    /// The position of the term that caused this error, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            IrError::UnsupportedSymbol { position, .. }
            | IrError::EmptyOperator { position }
            | IrError::InvalidBasisGrouping { position, .. }
            | IrError::QubitOutOfRange { position, .. }
            | IrError::LengthMismatch { position, .. }
            | IrError::ZeroCoefficient { position }
            | IrError::NegativeParameter { position, .. }
            | IrError::ParameterOutOfBounds { position, .. }
            | IrError::WrongFormat { position, .. } => Some(*position),
            IrError::Io { .. } => None,
        }
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
