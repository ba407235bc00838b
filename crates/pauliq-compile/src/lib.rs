//! Pauli term translation for pauliq
//!
//! This crate lowers weighted Pauli strings to OpenQASM. Each term is
//! synthesized on its own into a basis-change and CNOT-ladder circuit around
//! a single `rz`, so terms are translated concurrently and reassembled in
//! input order.
//!
//! # Architecture
//!
//! ```text
//! OperatorSet
//!       │
//!       ▼
//! ┌────────────┐
//! │ Translator │ ◄── TranslationConfig (version, multiplier, execution)
//! └────────────┘
//!       │  per term, in parallel
//!       ├── encode      (Pauli string -> basis groups)
//!       ├── synthesize  (pivot, ladder, rz)
//!       └── emit_block  (OpenQASM text)
//!       │
//!       ▼
//! BTreeMap<position, block> ──► assemble ──► program
//! ```
//!
//! # Example
//!
//! ```rust
//! use pauliq_compile::{TranslationConfig, translate};
//! use pauliq_ir::parse_operators;
//!
//! let set = parse_operators("XIZ 2.0 0\n").unwrap();
//! let program = translate(&set, &TranslationConfig::default()).unwrap();
//!
//! assert!(program.starts_with("OPENQASM 2.0;"));
//! assert!(program.contains("rz(0.5*2.0*$[1]) q[2];"));
//! ```

pub mod config;
pub mod error;
pub mod synthesis;
pub mod translate;

pub use config::{ConfigError, ExecutionMode, TranslationConfig};
pub use error::{CompileError, CompileResult};
pub use synthesis::synthesize;
pub use translate::{Translator, translate};
