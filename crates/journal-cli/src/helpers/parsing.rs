//! Parsing of `--posting ACCOUNT[=AMOUNT][;COMMENT]` and `--format` values.

use journal_core::NewPosting;

use crate::errors::CliError;
use crate::ui::OutputFormat;

/// Validate `--format` against `--json`.
pub fn parse_output_format(
    value: Option<&str>,
    json: bool,
) -> anyhow::Result<Option<OutputFormat>> {
    let Some(value) = value else {
        return Ok(None);
    };
    if json {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    Ok(Some(value.parse::<OutputFormat>()?))
}

/// Parse one `--posting` value.
///
/// The comment runs from the first `;`; the amount from the first `=`
/// before it. A posting without `=` is the elided balancing posting.
pub fn parse_posting(value: &str) -> anyhow::Result<NewPosting> {
    let (spec, comment) = match value.split_once(';') {
        Some((spec, comment)) => (spec, comment.trim()),
        None => (value, ""),
    };
    let (account, amount) = match spec.split_once('=') {
        Some((account, amount)) => (account.trim(), amount.trim()),
        None => (spec.trim(), ""),
    };
    if account.is_empty() {
        return Err(CliError::invalid_input(format!(
            "Invalid posting '{}': expected ACCOUNT[=AMOUNT][;COMMENT]",
            value
        ))
        .into());
    }
    Ok(NewPosting::new(account, amount).with_comment(comment))
}
