//! `OpenQASM` Emitter for pauliq
//!
//! Turns synthesized [`TermCircuit`](pauliq_ir::TermCircuit)s into OpenQASM
//! text and assembles complete programs in either dialect.
//!
//! | Dialect | Header |
//! |---------|--------|
//! | 2.0 | `OPENQASM 2.0;` `include "qelib1.inc";` `qreg q[n];` `creg c[n];` |
//! | 3.0 | `OPENQASM 3.0;` `include "stdgates.inc";` `qubit[n] q;` `bit[n] c;` |
//!
//! # Example
//!
//! ```rust
//! use pauliq_ir::{Angle, Gate, Instruction, QubitId, TermCircuit};
//! use pauliq_qasm::{assemble, emit_block, QasmVersion};
//!
//! let term = TermCircuit {
//!     position: 1,
//!     pivot: QubitId(0),
//!     instructions: vec![Instruction::single(
//!         Gate::Rz(Angle::Term { multiplier: 0.5, coefficient: 1.0, parameter: 1 }),
//!         QubitId(0),
//!     )],
//! };
//!
//! let block = emit_block(&term);
//! let program = assemble(QasmVersion::V3, 1, [block.as_str()]);
//! assert!(program.starts_with("OPENQASM 3.0;"));
//! assert!(program.ends_with("rz(0.5*1.0*$[1]) q[0];\n"));
//! ```

mod emitter;
mod program;
mod version;

pub use emitter::{emit_block, format_real};
pub use program::assemble;
pub use version::QasmVersion;
