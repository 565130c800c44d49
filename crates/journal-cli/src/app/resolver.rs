//! Path resolution for config and journal files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, JournalConfig};
use crate::errors::CliError;

/// Resolve the config file path, checking LEDGER_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("LEDGER_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the journal path from `--file` / `LEDGER_FILE`, then the config.
pub fn resolve_journal_path(
    cli: &Cli,
    config: &JournalConfig,
    config_path: &Path,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.file.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    match config.journal.path.as_deref() {
        Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => Err(CliError::not_found(
            "No journal file configured",
            missing_config_message(config_path),
        )
        .into()),
    }
}

/// Hint when neither a flag nor the config names a journal.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "Hint: Pass --file /path/to/my.ledger, set LEDGER_FILE, or run:\n  journal config init --journal /path/to/my.ledger\n(config: {})",
        config_path.display()
    )
}

/// Error message when the journal file itself is missing.
pub fn missing_journal_message(path: &Path) -> String {
    format!("No journal found at {}", path.display())
}
