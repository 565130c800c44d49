//! Transaction data model.
//!
//! Records are never stored as objects: every read and every mutation parses
//! them again from the current text, so nothing here carries an identifier.
//! Presentation ids are attached only when a list is produced.

use serde::{Deserialize, Serialize};

use crate::error::{JournalError, Result};
use crate::parse::{is_date_shape, splits_before_amount, starts_with_amount};

/// One account line inside a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Account name, segments separated by `:`
    pub account: String,

    /// Raw amount text; empty for an elided balancing posting
    #[serde(default)]
    pub amount: String,

    /// Comment text without the leading `;`
    #[serde(default)]
    pub comment: String,
}

impl Posting {
    pub fn new(account: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            amount: amount.into(),
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Whether this posting balances the transaction implicitly.
    pub fn is_elided(&self) -> bool {
        self.amount.is_empty()
    }
}

/// One ledger entry: a header line plus its postings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date exactly as written (`YYYY/MM/DD`)
    pub date: String,

    /// Header carried the `*` marker
    pub cleared: bool,

    /// Header carried the `!` marker
    pub pending: bool,

    /// Remainder of the header line
    pub payee: String,

    pub postings: Vec<Posting>,
}

/// Half-open span of line numbers within one text snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.end
    }
}

/// A transaction together with where it sits in the text it was parsed from.
///
/// The ranges are only meaningful against that exact snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTransaction {
    pub transaction: Transaction,

    /// `[header line, next header line)`, or up to the end of the text
    pub line_range: LineRange,

    /// First line after the last header, posting or comment line owned by
    /// the record. Lines in `body_end..line_range.end` are blank lines or
    /// top-level directives trailing the record.
    pub body_end: usize,
}

impl ParsedTransaction {
    /// Lines owned by the record itself.
    pub fn body_range(&self) -> LineRange {
        LineRange::new(self.line_range.start, self.body_end)
    }

    /// Blank and top-level lines between the record body and the next header.
    pub fn trailing_range(&self) -> LineRange {
        LineRange::new(self.body_end, self.line_range.end)
    }
}

/// A transaction as returned to callers, keyed by presentation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedTransaction {
    /// Presentation id (0 = most recently written record)
    pub id: usize,

    #[serde(flatten)]
    pub transaction: Transaction,
}

/// Posting supplied by a caller for insert or replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPosting {
    #[serde(default)]
    pub account: String,

    #[serde(default)]
    pub amount: String,

    #[serde(default)]
    pub comment: String,
}

impl NewPosting {
    pub fn new(account: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            amount: amount.into(),
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Builder for a transaction supplied by a caller.
///
/// Deserializes from the request payload shape
/// `{ date, payee, isCleared, postings: [{ account, amount, comment }] }`.
/// Missing fields deserialize to empty values so that [`validate`] reports
/// them as invalid input rather than as a decoding failure.
///
/// [`validate`]: NewTransaction::validate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub payee: String,

    #[serde(default)]
    pub is_cleared: bool,

    #[serde(default)]
    pub postings: Vec<NewPosting>,
}

impl NewTransaction {
    pub fn new(date: impl Into<String>, payee: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            payee: payee.into(),
            is_cleared: false,
            postings: Vec::new(),
        }
    }

    pub fn cleared(mut self, cleared: bool) -> Self {
        self.is_cleared = cleared;
        self
    }

    pub fn with_posting(mut self, account: impl Into<String>, amount: impl Into<String>) -> Self {
        self.postings.push(NewPosting::new(account, amount));
        self
    }

    pub fn with_postings(mut self, postings: Vec<NewPosting>) -> Self {
        self.postings = postings;
        self
    }

    /// Start from an existing record, e.g. to edit a few of its fields.
    /// The pending marker does not carry over.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            date: transaction.date.clone(),
            payee: transaction.payee.clone(),
            is_cleared: transaction.cleared,
            postings: transaction
                .postings
                .iter()
                .map(|posting| {
                    NewPosting::new(posting.account.clone(), posting.amount.clone())
                        .with_comment(posting.comment.clone())
                })
                .collect(),
        }
    }

    /// Decode the request payload.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Reject records that would not survive a write and re-parse.
    pub fn validate(&self) -> Result<()> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(JournalError::InvalidInput(
                "transaction date is required".to_string(),
            ));
        }
        if !is_date_shape(date) {
            return Err(JournalError::InvalidInput(format!(
                "date must look like YYYY/MM/DD: {}",
                date
            )));
        }
        if self.payee.trim().is_empty() {
            return Err(JournalError::InvalidInput(
                "transaction payee is required".to_string(),
            ));
        }
        if has_line_break(&self.payee) {
            return Err(JournalError::InvalidInput(
                "payee must be a single line".to_string(),
            ));
        }
        if !self.is_cleared && self.payee.trim().starts_with(&['*', '!'][..]) {
            return Err(JournalError::InvalidInput(format!(
                "payee of an uncleared transaction cannot start with a status marker: {}",
                self.payee.trim()
            )));
        }
        if self.postings.is_empty() {
            return Err(JournalError::InvalidInput(
                "transaction needs at least one posting".to_string(),
            ));
        }

        for (index, posting) in self.postings.iter().enumerate() {
            let number = index + 1;
            if posting.account.trim().is_empty() {
                return Err(JournalError::InvalidInput(format!(
                    "posting {} has no account",
                    number
                )));
            }
            if posting.account.contains(';') || posting.amount.contains(';') {
                return Err(JournalError::InvalidInput(format!(
                    "posting {} contains ';' outside its comment",
                    number
                )));
            }
            if has_line_break(&posting.account)
                || has_line_break(&posting.amount)
                || has_line_break(&posting.comment)
            {
                return Err(JournalError::InvalidInput(format!(
                    "posting {} must be a single line",
                    number
                )));
            }
            if splits_before_amount(&posting.account) {
                return Err(JournalError::InvalidInput(format!(
                    "posting {} account contains a separator followed by an amount: {}",
                    number,
                    posting.account.trim()
                )));
            }
            let amount = posting.amount.trim();
            if !amount.is_empty() && !starts_with_amount(amount) {
                return Err(JournalError::InvalidInput(format!(
                    "posting {} amount must start with a number, optionally after $, € or £: {}",
                    number, amount
                )));
            }
        }

        Ok(())
    }

    /// Validate and convert into the record that will be formatted.
    pub fn into_transaction(self) -> Result<Transaction> {
        self.validate()?;
        Ok(Transaction {
            date: self.date.trim().to_string(),
            cleared: self.is_cleared,
            pending: false,
            payee: self.payee.trim().to_string(),
            postings: self
                .postings
                .into_iter()
                .map(|posting| Posting {
                    account: posting.account.trim().to_string(),
                    amount: posting.amount.trim().to_string(),
                    comment: posting.comment.trim().to_string(),
                })
                .collect(),
        })
    }
}

fn has_line_break(value: &str) -> bool {
    value.contains('\n') || value.contains('\r')
}
