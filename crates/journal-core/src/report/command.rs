//! Running the external `ledger` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{Report, ReportKind};
use crate::error::{JournalError, Result};

/// `<program> -f <file> <args>`.
#[derive(Debug, Clone)]
pub struct LedgerCommand {
    program: String,
    file: PathBuf,
}

impl LedgerCommand {
    pub fn new(program: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            file: file.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Run with `args` and return stdout.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Report` if the program cannot be started or
    /// exits unsuccessfully.
    pub fn output(&self, args: &[&str]) -> Result<String> {
        debug!(program = %self.program, ?args, "running report command");
        let output = Command::new(&self.program)
            .arg("-f")
            .arg(&self.file)
            .args(args)
            .output()
            .map_err(|e| JournalError::Report(format!("Failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            return Err(JournalError::Report(if detail.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                format!("{} exited with {}: {}", self.program, output.status, detail)
            }));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub fn report(&self, kind: ReportKind) -> Result<Report> {
        let output = self.output(kind.args())?;
        Ok(Report::parse(kind, &output))
    }
}
