//! Application context for the Journal CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;

use journal_core::{FileTextSource, Formatter, Journal, LedgerCommand};

use crate::cli::Cli;
use crate::config::{read_config, JournalConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::hooks::run_after_write_hook;
use super::resolver::{missing_journal_message, resolve_config_path, resolve_journal_path};

/// Application context that bundles CLI args with the configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config_path: OnceCell<PathBuf>,
    config: OnceCell<JournalConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config_path: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn config_path(&self) -> anyhow::Result<&Path> {
        self.config_path
            .get_or_try_init(resolve_config_path)
            .map(PathBuf::as_path)
    }

    /// Get the configuration, loading it lazily. A missing file means
    /// defaults.
    pub fn config(&self) -> anyhow::Result<&JournalConfig> {
        self.config.get_or_try_init(|| {
            let path = self.config_path()?;
            if path.exists() {
                read_config(path)
            } else {
                Ok(JournalConfig::default())
            }
        })
    }

    pub fn journal_path(&self) -> anyhow::Result<PathBuf> {
        resolve_journal_path(self.cli, self.config()?, self.config_path()?)
    }

    /// Open the journal service over the resolved file.
    pub fn open_journal(&self) -> anyhow::Result<Journal<FileTextSource>> {
        let path = self.journal_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_journal_message(&path),
                "Hint: Create the file or point --file at an existing journal.",
            )
            .into());
        }
        let config = self.config()?;
        let source = FileTextSource::new(path).with_backup(config.journal.backup);
        Ok(Journal::new(source).with_formatter(Formatter::new(config.format.amount_column)))
    }

    /// The external report tool bound to the journal file.
    pub fn ledger_command(&self) -> anyhow::Result<LedgerCommand> {
        let path = self.journal_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_journal_message(&path),
                "Hint: Create the file or point --file at an existing journal.",
            )
            .into());
        }
        Ok(LedgerCommand::new(self.config()?.ledger.command.clone(), path))
    }

    /// Run the configured post-write hook, if any.
    pub fn after_write(&self, journal_path: &Path) -> anyhow::Result<()> {
        if let Some(script) = self.config()?.hooks.after_write.as_deref() {
            run_after_write_hook(script, journal_path);
        }
        Ok(())
    }

    /// Build the UI context for one command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color)
    }
}
