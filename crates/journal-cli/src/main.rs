//! Journal CLI - read and edit a plain-text ledger journal
//!
//! This is the command-line interface over `journal-core`. Each command
//! parses the journal file fresh, so IDs shown by `list` are valid until
//! the next write.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use std::io::IsTerminal;

use clap::Parser;
use journal_core::VERSION;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::commands::{accounts, config as config_cmd, misc, report, transactions};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);
        let hint = hint.or_else(|| contextual_hint(message));

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(errors::exit_code(&e));
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins unless `--verbose`
/// is given.
fn init_logging(verbose: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color && std::io::stderr().is_terminal())
        .finish();
    // Only fails if a subscriber is already set.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Split an explicit "Hint:" line off an error message.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    for marker in ["\nHint:", "\nhint:"] {
        if let Some(idx) = error.find(marker) {
            return (&error[..idx], Some(error[idx + 1..].to_string()));
        }
    }
    (error, None)
}

/// Hints for common failures that carry none of their own.
fn contextual_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("not found: transaction") {
        return Some("Hint: Run `journal list` to find transaction IDs.".to_string());
    }

    if error_lower.contains("journal file not found") {
        return Some(
            "Hint: Check --file, LEDGER_FILE or [journal] path in the config.".to_string(),
        );
    }

    if error_lower.starts_with("report error") {
        return Some(
            "Hint: Make sure `ledger` is installed or set [ledger] command in the config."
                .to_string(),
        );
    }

    if error_lower.contains("invalid input") && error_lower.contains("date") {
        return Some("Hint: Dates are written YYYY/MM/DD, e.g. 2024/01/05.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::List(args)) => {
            transactions::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            transactions::handle_show(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            transactions::handle_add(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            transactions::handle_edit(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            transactions::handle_delete(ctx, args)?;
        }
        Some(Commands::Accounts(args)) => {
            accounts::handle_accounts(ctx, args)?;
        }
        Some(Commands::Report(args)) => {
            report::handle_report(ctx, args)?;
        }
        Some(Commands::Config(args)) => match &args.command {
            ConfigSubcommand::Init(init_args) => {
                config_cmd::handle_config_init(ctx, init_args)?;
            }
            ConfigSubcommand::Path => {
                config_cmd::handle_config_path(ctx)?;
            }
        },
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Journal v{}", VERSION);
            println!("\nQuickstart:");
            println!("  journal config init --journal ~/finances/main.ledger");
            println!("  journal add --payee \"Grocery\" -p Expenses:Food=\\$50 -p Assets:Checking");
            println!("  journal list");
            println!("  journal show 0");
            println!("  journal report balance");
            println!("\nRun `journal --help` for full usage.");
        }
    }

    Ok(())
}
