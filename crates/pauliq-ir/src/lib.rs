//! pauliq Operator Representation
//!
//! This crate holds the data model shared by the pauliq lowering stack:
//! validated operator terms, the per-basis encoding of Pauli strings, and
//! the small gate-level IR produced by term synthesis.
//!
//! # Core Components
//!
//! - **Terms**: [`OperatorRecord`] (one input line) and [`OperatorSet`]
//!   (all terms sharing one register size)
//! - **Decoding**: [`EncodedOperator`] splits a Pauli string into ascending
//!   qubit columns per [`Basis`]
//! - **Gate IR**: [`Gate`], [`Angle`], [`Instruction`] and [`TermCircuit`]
//! - **Input**: [`parse_operators`] / [`read_operators`] for the
//!   `<pauli> <coefficient> <parameter>` line format
//!
//! # Example
//!
//! ```rust
//! use pauliq_ir::{parse_operators, Basis};
//!
//! let set = parse_operators("XIZ 2.0 0\nIYY -0.5 1\n").unwrap();
//! assert_eq!(set.num_qubits(), 3);
//!
//! let encoded = set.records()[0].encode().unwrap();
//! assert_eq!(encoded.group(Basis::X), &[1]);
//! assert_eq!(encoded.pivot(), Some(3));
//! ```

pub mod error;
pub mod input;
pub mod instruction;
pub mod operator;
pub mod pauli;
pub mod qubit;

pub use error::{IrError, IrResult};
pub use input::{parse_operators, parse_record, read_operators};
pub use instruction::{Angle, Gate, Instruction, TermCircuit};
pub use operator::{OperatorRecord, OperatorSet};
pub use pauli::{Basis, EncodedOperator, Pauli};
pub use qubit::QubitId;
