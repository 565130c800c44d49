//! Plain file text source with backup and atomic replace.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::TextSource;
use crate::error::{JournalError, Result};

/// A journal stored as a UTF-8 file on disk.
#[derive(Debug, Clone)]
pub struct FileTextSource {
    path: PathBuf,
    backup: bool,
}

impl FileTextSource {
    /// Open a file source; backups are on.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: true,
        }
    }

    /// Toggle copying the current file to `<path>.bak` before each write.
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the copy taken before each write.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn write_backup(&self) -> Result<()> {
        if !self.backup || !self.path.exists() {
            return Ok(());
        }
        let backup_path = self.backup_path();
        fs::copy(&self.path, &backup_path).map_err(|e| {
            JournalError::Io(format!(
                "Backup to {} failed: {}",
                backup_path.display(),
                e
            ))
        })?;
        debug!(path = %backup_path.display(), "wrote backup");
        Ok(())
    }
}

impl TextSource for FileTextSource {
    fn read(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(JournalError::Io(format!(
                "Journal file not found: {}",
                self.path.display()
            ))),
            Err(e) => Err(JournalError::Io(format!(
                "Cannot read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.write_backup()?;
        crate::fs::write_atomic(&self.path, text.as_bytes()).map_err(|e| {
            JournalError::Io(format!("Cannot write {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "wrote journal");
        Ok(())
    }
}
