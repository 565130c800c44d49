use journal_core::ReportKind;

use crate::app::AppContext;
use crate::cli::ReportArgs;
use crate::helpers::parse_output_format;
use crate::output::{print_json, print_report};

pub fn handle_report(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    parse_output_format(args.format.as_deref(), args.json)?;
    let kind = ReportKind::from(args.report);
    let report = ctx.ledger_command()?.report(kind)?;

    if args.json {
        return print_json(&report);
    }
    if report.is_empty() {
        if !ctx.quiet() {
            println!("No rows in {} report.", kind);
        }
        return Ok(());
    }
    let ui = ctx.ui_context(false, args.format.as_deref());
    print_report(&ui, kind, &report);
    Ok(())
}
