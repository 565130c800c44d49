use std::path::PathBuf;

use dialoguer::Input;

use crate::app::AppContext;
use crate::cli::ConfigInitArgs;
use crate::config::{write_config, JournalConfig};
use crate::errors::CliError;
use crate::ui::{badge, print, receipt, Badge};

pub fn handle_config_init(ctx: &AppContext, args: &ConfigInitArgs) -> anyhow::Result<()> {
    let config_path = ctx.config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Use --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let ui = ctx.ui_context(false, None);
    let journal = match args.journal.clone().or_else(|| ctx.cli().file.clone()) {
        Some(path) => Some(path),
        None if ui.is_interactive() && !ctx.quiet() => {
            let value: String = Input::new()
                .with_prompt("Journal file (leave empty to set later)")
                .allow_empty(true)
                .interact_text()?;
            Some(value).filter(|v| !v.trim().is_empty())
        }
        None => None,
    };

    let config = JournalConfig::new(journal.map(PathBuf::from));
    write_config(config_path, &config)?;

    if ctx.quiet() {
        return Ok(());
    }
    let config_display = config_path.display().to_string();
    let journal_display = config.journal.path.as_deref().unwrap_or("(not set)");
    print(
        &ui,
        &receipt(
            &ui,
            "Wrote config",
            &[
                ("Config", config_display.as_str()),
                ("Journal", journal_display),
            ],
        ),
    );
    if config.journal.path.is_none() {
        print(
            &ui,
            &badge(&ui, Badge::Warn, "No journal path set; pass --file or edit [journal] path."),
        );
    }
    Ok(())
}

pub fn handle_config_path(ctx: &AppContext) -> anyhow::Result<()> {
    println!("{}", ctx.config_path()?.display());
    Ok(())
}
