use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::helpers::parse_output_format;
use crate::output::{print_json, print_transaction_list};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    parse_output_format(args.format.as_deref(), args.json)?;
    let journal = ctx.open_journal()?;

    let limit = args.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let listed = journal.list(Some(limit))?;
    if args.json {
        return print_json(&listed);
    }

    if listed.is_empty() {
        if !ctx.quiet() {
            println!("No transactions found.");
        }
        return Ok(());
    }

    let total = journal.count()?;
    let ui = ctx.ui_context(false, args.format.as_deref());
    print_transaction_list(&ui, &listed, total, ctx.quiet());
    Ok(())
}
