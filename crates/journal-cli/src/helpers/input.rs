//! Reading transaction input from flags, a JSON file or stdin.

use std::io::Read;

use journal_core::NewTransaction;

use super::parsing::parse_posting;
use crate::cli::TransactionArgs;

/// Today's date in journal format.
pub fn today() -> String {
    chrono::Local::now().format("%Y/%m/%d").to_string()
}

/// Read JSON text from a path, or from stdin for `-`.
pub fn read_json_source(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        return Ok(buffer);
    }
    std::fs::read_to_string(source)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", source, e))
}

/// Build the transaction to write.
///
/// `--from-json` supplies the whole record. Otherwise flags are applied on
/// top of `base`: the current record for `edit`, an empty one dated today
/// for `add`. Any `--posting` replaces the whole posting list. Validation
/// is left to the core so that every path reports the same errors.
pub fn build_transaction(
    args: &TransactionArgs,
    base: NewTransaction,
    uncleared: bool,
) -> anyhow::Result<NewTransaction> {
    if let Some(source) = args.from_json.as_deref() {
        let text = read_json_source(source)?;
        return Ok(NewTransaction::from_json(&text)?);
    }

    let mut transaction = base;
    if let Some(date) = args.date.as_deref() {
        transaction.date = date.to_string();
    }
    if let Some(payee) = args.payee.as_deref() {
        transaction.payee = payee.to_string();
    }
    if args.cleared {
        transaction.is_cleared = true;
    }
    if uncleared {
        transaction.is_cleared = false;
    }
    if !args.posting.is_empty() {
        let postings = args
            .posting
            .iter()
            .map(|value| parse_posting(value))
            .collect::<anyhow::Result<Vec<_>>>()?;
        transaction = transaction.with_postings(postings);
    }
    Ok(transaction)
}
