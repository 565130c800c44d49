use journal_core::{Report, ReportKind};

use crate::app::AppContext;
use crate::cli::AccountsArgs;
use crate::output::{print_accounts, print_json};

pub fn handle_accounts(ctx: &AppContext, args: &AccountsArgs) -> anyhow::Result<()> {
    let accounts = if args.from_text {
        ctx.open_journal()?.accounts()?
    } else {
        match ctx.ledger_command()?.report(ReportKind::Accounts)? {
            Report::Accounts(accounts) => accounts,
            other => {
                return Err(anyhow::anyhow!(
                    "Unexpected report shape for accounts ({} rows)",
                    other.len()
                ))
            }
        }
    };

    if args.json {
        return print_json(&accounts);
    }
    let ui = ctx.ui_context(false, None);
    print_accounts(&ui, &accounts);
    Ok(())
}
