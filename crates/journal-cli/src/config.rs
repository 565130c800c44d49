use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use journal_core::DEFAULT_AMOUNT_COLUMN;

/// Contents of `config.toml`. Every section is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JournalConfig {
    #[serde(default)]
    pub journal: JournalSection,
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub hooks: HooksSection,
    #[serde(default)]
    pub format: FormatSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JournalSection {
    pub path: Option<String>,
    /// Copy the journal to `<path>.bak` before each write
    #[serde(default = "default_backup")]
    pub backup: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerSection {
    /// Program used for reports
    #[serde(default = "default_ledger_command")]
    pub command: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HooksSection {
    /// Script run with `bash` after every successful write
    pub after_write: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatSection {
    #[serde(default = "default_amount_column")]
    pub amount_column: usize,
}

impl Default for JournalSection {
    fn default() -> Self {
        Self {
            path: None,
            backup: default_backup(),
        }
    }
}

impl Default for LedgerSection {
    fn default() -> Self {
        Self {
            command: default_ledger_command(),
        }
    }
}

impl Default for FormatSection {
    fn default() -> Self {
        Self {
            amount_column: default_amount_column(),
        }
    }
}

fn default_backup() -> bool {
    true
}

fn default_ledger_command() -> String {
    "ledger".to_string()
}

fn default_amount_column() -> usize {
    DEFAULT_AMOUNT_COLUMN
}

impl JournalConfig {
    pub fn new(journal_path: Option<PathBuf>) -> Self {
        Self {
            journal: JournalSection {
                path: journal_path.map(|path| path.to_string_lossy().to_string()),
                ..JournalSection::default()
            },
            ..Self::default()
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<JournalConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &JournalConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("journal"));
        }
    }
    Ok(home_dir()?.join(".config").join("journal"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
