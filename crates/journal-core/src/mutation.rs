//! Planning text edits for insert, replace and delete.
//!
//! Every operation takes the complete current text and returns the complete
//! new text. The text is parsed again on each call and the target id is
//! resolved against that parse, never against an earlier listing. Only the
//! bytes of the target record change; every other line is copied through.
//! New lines use the text's own terminator, `\r\n` when its first line ends
//! that way.

use crate::error::{JournalError, Result};
use crate::format::Formatter;
use crate::identity::to_file_index;
use crate::model::{NewTransaction, ParsedTransaction};
use crate::parse::Snapshot;

/// A requested change, addressed by presentation id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Insert(NewTransaction),
    Replace {
        id: usize,
        transaction: NewTransaction,
    },
    Delete {
        id: usize,
    },
}

/// Computes new journal text for a mutation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutationPlanner {
    formatter: Formatter,
}

impl MutationPlanner {
    pub fn new(formatter: Formatter) -> Self {
        Self { formatter }
    }

    pub fn apply(&self, text: &str, mutation: &Mutation) -> Result<String> {
        match mutation {
            Mutation::Insert(transaction) => self.insert(text, transaction),
            Mutation::Replace { id, transaction } => self.replace(text, *id, transaction),
            Mutation::Delete { id } => self.delete(text, *id),
        }
    }

    /// Append the record after a separating blank line.
    pub fn insert(&self, text: &str, transaction: &NewTransaction) -> Result<String> {
        let record = transaction.clone().into_transaction()?;
        let eol = line_ending(text);
        let formatted = with_line_ending(self.formatter.format(&record), eol);

        let mut out = String::with_capacity(text.len() + formatted.len() + 2 * eol.len());
        out.push_str(text);
        if !out.is_empty() && !out.ends_with('\n') {
            out.push_str(eol);
        }
        if !text.trim().is_empty() && !ends_with_blank_line(&out) {
            out.push_str(eol);
        }
        out.push_str(&formatted);
        Ok(out)
    }

    /// Swap the target record's lines for the formatted replacement, keeping
    /// the blank lines and directives that trail it.
    pub fn replace(&self, text: &str, id: usize, transaction: &NewTransaction) -> Result<String> {
        let record = transaction.clone().into_transaction()?;
        let snapshot = Snapshot::parse(text);
        let target = locate(&snapshot, id)?;
        let formatted = with_line_ending(self.formatter.format(&record), line_ending(text));

        let index = snapshot.line_index();
        let before = &text[..index.offset(target.line_range.start)];
        let after = &text[index.offset(target.body_end)..];

        let mut out = String::with_capacity(before.len() + formatted.len() + after.len());
        out.push_str(before);
        out.push_str(&formatted);
        out.push_str(after);
        Ok(out)
    }

    /// Remove the target record and the blank lines right after it.
    ///
    /// Top-level lines trailing the record (comments, directives) are not
    /// part of the transaction and stay, along with everything after them.
    pub fn delete(&self, text: &str, id: usize) -> Result<String> {
        let snapshot = Snapshot::parse(text);
        let target = locate(&snapshot, id)?;

        let trailing = target.trailing_range();
        let keep_from = (trailing.start..trailing.end)
            .find(|&line| !snapshot.line(line).trim().is_empty())
            .unwrap_or(trailing.end);

        let index = snapshot.line_index();
        let before = &text[..index.offset(target.line_range.start)];
        let after = &text[index.offset(keep_from)..];

        let mut out = String::with_capacity(before.len() + after.len());
        out.push_str(before);
        out.push_str(after);
        Ok(out)
    }
}

fn line_ending(text: &str) -> &'static str {
    match text.find('\n') {
        Some(end) if text[..end].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

fn with_line_ending(formatted: String, eol: &str) -> String {
    if eol == "\n" {
        formatted
    } else {
        formatted.replace('\n', eol)
    }
}

/// Whether `text`, which ends with a line terminator, ends with an empty line.
fn ends_with_blank_line(text: &str) -> bool {
    text.ends_with("\n\n") || text.ends_with("\n\r\n")
}

/// Resolve a presentation id with the count from this very parse.
fn locate<'s>(snapshot: &'s Snapshot<'_>, id: usize) -> Result<&'s ParsedTransaction> {
    let file_index = to_file_index(id, snapshot.total_count())?;
    snapshot
        .records()
        .get(file_index)
        .ok_or_else(|| JournalError::NotFound(format!("transaction {}", id)))
}
