//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Journal · command (context)"
/// Plain mode: "journal command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Journal", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("journal {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align_right: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align_right: false,
        }
    }

    /// Right-aligned column, for amounts.
    pub const fn right(header: &'static str) -> Self {
        Self {
            header,
            align_right: true,
        }
    }
}

/// Render a table.
///
/// Pretty mode: comfy-table with borders
/// Plain mode: tab-separated values, no header
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);
    table.set_header(columns.iter().map(|c| c.header).collect::<Vec<_>>());

    for row in rows {
        table.add_row(row.iter().zip(columns).map(|(value, column)| {
            let cell = Cell::new(value);
            if column.align_right {
                cell.set_alignment(CellAlignment::Right)
            } else {
                cell
            }
        }));
    }

    table.to_string()
}

/// Print a message unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(styled(h, styles::dim(), ctx.color));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!(
                "hint={}",
                h.trim_start_matches("Hint:").trim_start()
            ));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_modes() {
        let h = header(&pretty_ctx(), "list", Some("3 of 10"));
        assert!(h.contains("Journal"));
        assert!(h.contains("list (3 of 10)"));
        assert_eq!(header(&plain_ctx(), "list", None), "journal list");
    }

    #[test]
    fn test_kv_plain() {
        assert_eq!(kv(&plain_ctx(), "Last Cleared", "x"), "last_cleared=x");
        assert!(kv(&pretty_ctx(), "Payee", "Grocery").contains("Payee:"));
    }

    #[test]
    fn test_hint_plain() {
        assert_eq!(hint(&plain_ctx(), "try this"), "hint=try this");
    }

    #[test]
    fn test_receipt_plain() {
        let r = receipt(&plain_ctx(), "Added", &[("ID", "0"), ("Payee", "Rent")]);
        assert_eq!(r, "status=ok\nid=0\npayee=Rent");
    }

    #[test]
    fn test_table_plain_is_tab_separated() {
        let columns = [Column::new("ID"), Column::new("Payee")];
        let rows = vec![vec!["0".to_string(), "Grocery Store".to_string()]];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "0\tGrocery Store");
    }

    #[test]
    fn test_table_pretty() {
        let columns = [Column::new("Account"), Column::right("Amount")];
        let rows = vec![
            vec!["Expenses:Food".to_string(), "$50.00".to_string()],
            vec!["Assets:Checking".to_string(), "$-50.00".to_string()],
        ];
        let t = table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Account"));
        assert!(t.contains("Amount"));
        assert!(t.contains("Expenses:Food"));
        assert!(t.contains("$-50.00"));
    }

    #[test]
    fn test_error_message_plain_strips_hint_label() {
        let out = error_message(&plain_ctx(), "Not found: transaction 9", Some("Hint: run list"));
        assert_eq!(out, "error=Not found: transaction 9\nhint=run list");
    }

    #[test]
    fn test_error_message_pretty() {
        let out = error_message(&pretty_ctx(), "boom", None);
        assert!(out.contains("[\u{2717}]"));
        assert!(out.contains("boom"));
    }
}
