//! In-memory text source for tests and embedding.

use super::TextSource;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTextSource {
    text: String,
    writes: usize,
}

impl MemoryTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            writes: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl TextSource for MemoryTextSource {
    fn read(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.text = text.to_string();
        self.writes += 1;
        Ok(())
    }
}
