//! Error types for journal core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages and exit codes. Lines the lexer cannot classify never
//! surface here: they degrade to inert lines instead of failing a parse.

use thiserror::Error;

/// Result type alias for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Caller-supplied transaction was rejected before any text was produced
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Identifier outside the records of the current text
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backing text could not be read or written
    #[error("I/O error: {0}")]
    Io(String),

    /// External report tool failed
    #[error("Report error: {0}")]
    Report(String),
}

impl JournalError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, JournalError::NotFound(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, JournalError::InvalidInput(_))
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::InvalidInput(err.to_string())
    }
}
