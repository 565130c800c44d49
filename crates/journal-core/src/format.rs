//! Serializing transactions back into ledger text.

use crate::model::{Posting, Transaction};

/// Width of the account field; amounts start right after it.
pub const DEFAULT_AMOUNT_COLUMN: usize = 50;

/// Spaces always kept between an account and its amount.
const MIN_AMOUNT_GAP: usize = 2;

const POSTING_INDENT: &str = "  ";

/// Ledger text writer.
///
/// Only the cleared marker is ever written: a pending record comes back out
/// without its `!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    amount_column: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            amount_column: DEFAULT_AMOUNT_COLUMN,
        }
    }
}

impl Formatter {
    pub fn new(amount_column: usize) -> Self {
        Self { amount_column }
    }

    pub fn amount_column(&self) -> usize {
        self.amount_column
    }

    /// Header line plus one line per posting, each ending in `\n`.
    pub fn format(&self, transaction: &Transaction) -> String {
        let mut out = String::new();
        out.push_str(&transaction.date);
        out.push(' ');
        if transaction.cleared {
            out.push_str("* ");
        }
        out.push_str(&transaction.payee);
        out.push('\n');

        for posting in &transaction.postings {
            self.write_posting(&mut out, posting);
        }
        out
    }

    fn write_posting(&self, out: &mut String, posting: &Posting) {
        out.push_str(POSTING_INDENT);
        out.push_str(&posting.account);
        if !posting.amount.is_empty() {
            let width = posting.account.chars().count();
            let padding = self.amount_column.saturating_sub(width).max(MIN_AMOUNT_GAP);
            out.push_str(&" ".repeat(padding));
            out.push_str(&posting.amount);
        }
        if !posting.comment.is_empty() {
            out.push_str("  ; ");
            out.push_str(&posting.comment);
        }
        out.push('\n');
    }
}

/// Format with the default amount column.
pub fn format_transaction(transaction: &Transaction) -> String {
    Formatter::default().format(transaction)
}
