//! Text source trait definition.

use crate::error::Result;

/// Backing store for the complete journal text.
///
/// Implementations must make `write` all-or-nothing: a failed write leaves
/// the previous text readable and unchanged.
pub trait TextSource {
    /// Read the current text.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Io` if the text cannot be read.
    fn read(&self) -> Result<String>;

    /// Replace the text with `text`.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Io` if the text cannot be persisted.
    fn write(&mut self, text: &str) -> Result<()>;
}
