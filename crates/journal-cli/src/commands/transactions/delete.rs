use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::output::print_json;
use crate::ui::{print, receipt};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut journal = ctx.open_journal()?;

    let ui = ctx.ui_context(args.json, None);
    let target = journal.get(args.id)?;
    if !args.yes && ui.is_interactive() && !ctx.quiet() {
        let proceed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Delete {} {}?",
                target.transaction.date, target.transaction.payee
            ))
            .default(false)
            .interact()?;
        if !proceed {
            return Err(anyhow::anyhow!("Delete cancelled"));
        }
    }

    let removed = journal.delete_if_unchanged(args.id, &target.transaction)?;
    ctx.after_write(journal.source().path())?;

    if args.json {
        return print_json(&removed);
    }
    if ctx.quiet() {
        return Ok(());
    }

    let id = args.id.to_string();
    print(
        &ui,
        &receipt(
            &ui,
            "Deleted transaction",
            &[
                ("ID", id.as_str()),
                ("Date", removed.date.as_str()),
                ("Payee", removed.payee.as_str()),
            ],
        ),
    );
    Ok(())
}
