//! Grouping classified lines into transaction records.

use tracing::debug;

use super::lexer::{Line, LineKind, Marker};
use crate::model::{LineRange, ParsedTransaction, Posting, Transaction};

/// Build records in file order.
///
/// A header closes the open record and opens the next one. Postings and
/// comments attach to the open record; anything before the first header is
/// ignored. Records without postings are returned as they are, so historical
/// files with malformed entries can still be read.
pub fn assemble(lines: &[Line<'_>], line_count: usize) -> Vec<ParsedTransaction> {
    let mut records = Vec::new();
    let mut open: Option<OpenRecord> = None;

    for line in lines {
        match line.kind {
            LineKind::Header {
                date,
                marker,
                payee,
            } => {
                if let Some(record) = open.take() {
                    records.push(record.close(line.number));
                }
                open = Some(OpenRecord::new(line.number, date, marker, payee));
            }
            LineKind::PostingWithAmount {
                account,
                amount,
                comment,
            } => {
                if let Some(record) = open.as_mut() {
                    record.push_posting(line.number, account, amount, comment);
                }
            }
            LineKind::PostingBare { account, comment } => {
                if let Some(record) = open.as_mut() {
                    record.push_posting(line.number, account, "", comment);
                }
            }
            LineKind::Comment(text) => {
                if let Some(record) = open.as_mut() {
                    record.attach_comment(line.number, text);
                }
            }
            LineKind::Other | LineKind::Blank => {}
        }
    }

    if let Some(record) = open {
        records.push(record.close(line_count));
    }

    debug!(count = records.len(), "assembled transactions");
    records
}

struct OpenRecord {
    transaction: Transaction,
    start: usize,
    body_end: usize,
}

impl OpenRecord {
    fn new(start: usize, date: &str, marker: Option<Marker>, payee: &str) -> Self {
        Self {
            transaction: Transaction {
                date: date.to_string(),
                cleared: marker == Some(Marker::Cleared),
                pending: marker == Some(Marker::Pending),
                payee: payee.to_string(),
                postings: Vec::new(),
            },
            start,
            body_end: start + 1,
        }
    }

    fn push_posting(&mut self, number: usize, account: &str, amount: &str, comment: &str) {
        self.transaction.postings.push(Posting {
            account: account.to_string(),
            amount: amount.to_string(),
            comment: comment.to_string(),
        });
        self.body_end = number + 1;
    }

    /// Comment lines extend the most recent posting's comment. A comment
    /// that precedes every posting of its record is dropped.
    fn attach_comment(&mut self, number: usize, text: &str) {
        self.body_end = number + 1;
        if text.is_empty() {
            return;
        }
        match self.transaction.postings.last_mut() {
            Some(posting) if posting.comment.is_empty() => posting.comment = text.to_string(),
            Some(posting) => {
                posting.comment.push(' ');
                posting.comment.push_str(text);
            }
            None => debug!(line = number, "comment before any posting dropped"),
        }
    }

    fn close(self, end: usize) -> ParsedTransaction {
        ParsedTransaction {
            transaction: self.transaction,
            line_range: LineRange::new(self.start, end),
            body_end: self.body_end,
        }
    }
}
