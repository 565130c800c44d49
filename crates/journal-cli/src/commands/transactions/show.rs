use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{print_json, print_transaction};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let journal = ctx.open_journal()?;
    let listed = journal.get(args.id)?;

    if args.json {
        return print_json(&listed);
    }
    let ui = ctx.ui_context(false, None);
    print_transaction(&ui, &listed, ctx.quiet());
    Ok(())
}
