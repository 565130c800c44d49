use journal_core::NewTransaction;

use crate::app::AppContext;
use crate::cli::TransactionArgs;
use crate::helpers::{build_transaction, today};
use crate::output::print_json;
use crate::ui::{hint, print, receipt};

pub fn handle_add(ctx: &AppContext, args: &TransactionArgs) -> anyhow::Result<()> {
    let mut journal = ctx.open_journal()?;

    let base = NewTransaction::new(today(), "");
    let transaction = build_transaction(args, base, false)?;
    let stored = journal.insert(&transaction)?;
    ctx.after_write(journal.source().path())?;

    if args.json {
        return print_json(&stored);
    }
    if ctx.quiet() {
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    let txn = &stored.transaction;
    let id = stored.id.to_string();
    let status = if txn.cleared { "cleared" } else { "uncleared" };
    let postings = txn.postings.len().to_string();
    print(
        &ui,
        &receipt(
            &ui,
            "Added transaction",
            &[
                ("ID", id.as_str()),
                ("Date", txn.date.as_str()),
                ("Payee", txn.payee.as_str()),
                ("Status", status),
                ("Postings", postings.as_str()),
            ],
        ),
    );
    if ui.mode.is_pretty() {
        print(&ui, &hint(&ui, "journal show 0"));
    }
    Ok(())
}
