use journal_core::NewTransaction;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::build_transaction;
use crate::output::print_json;
use crate::ui::{print, receipt};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut journal = ctx.open_journal()?;

    let current = journal.get(args.id)?;
    let base = NewTransaction::from_transaction(&current.transaction);
    let transaction = build_transaction(&args.transaction, base, args.uncleared)?;
    let stored = journal.replace_if_unchanged(args.id, &current.transaction, &transaction)?;
    ctx.after_write(journal.source().path())?;

    if args.transaction.json {
        return print_json(&stored);
    }
    if ctx.quiet() {
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    let id = stored.id.to_string();
    print(
        &ui,
        &receipt(
            &ui,
            "Updated transaction",
            &[
                ("ID", id.as_str()),
                ("Date", stored.transaction.date.as_str()),
                ("Payee", stored.transaction.payee.as_str()),
            ],
        ),
    );
    Ok(())
}
