//! Linter invocation error types.

use thiserror::Error;

/// Errors raised by a linter backend.
#[derive(Debug, Error)]
pub enum LintError {
    /// The linter call itself failed.
    #[error("linter call failed: {0}")]
    Call(String),

    /// The backend could not build a linter for the requested target.
    #[error("cannot build a linter for this target: {0}")]
    Unsupported(String),
}

impl LintError {
    /// Creates a call error.
    pub fn call(message: impl Into<String>) -> Self {
        Self::Call(message.into())
    }

    /// Creates an unsupported-target error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}
