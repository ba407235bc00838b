//! Error types for the compilation crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur during translation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Error from the IR crate (decoding, synthesis bounds).
    #[error(transparent)]
    Ir(#[from] pauliq_ir::IrError),

    /// Invalid translation configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The worker pool could not be started.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    /// Two terms share a position, so output order is ambiguous.
    #[error("Duplicate term position {0}")]
    DuplicatePosition(usize),
}

impl CompileError {
    /// The position of the term that caused this error, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            CompileError::Ir(e) => e.position(),
            CompileError::DuplicatePosition(position) => Some(*position),
            CompileError::Config(_) | CompileError::ThreadPool(_) => None,
        }
    }
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
