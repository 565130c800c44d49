//! Parsing ledger text into transaction records.
//!
//! - **lexer**: per-line shape classification
//! - **assembler**: grouping lines into records with their line ranges
//! - **lines**: line numbering and byte offsets for splicing

mod assembler;
mod lexer;
mod lines;

pub use assembler::assemble;
pub use lexer::{classify, is_date_shape, lex, Line, LineKind, Marker};
pub use lines::LineIndex;

pub(crate) use lexer::{splits_before_amount, starts_with_amount};

use crate::model::{ParsedTransaction, Transaction};

/// Records parsed from one text, with the line index they refer to.
///
/// Line ranges are only valid against the text held here; a snapshot is
/// built fresh for every read and every mutation.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    text: &'a str,
    index: LineIndex,
    records: Vec<ParsedTransaction>,
}

impl<'a> Snapshot<'a> {
    pub fn parse(text: &'a str) -> Self {
        let index = LineIndex::new(text);
        let records = assemble(&lex(text), index.line_count());
        Self {
            text,
            index,
            records,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.index
    }

    /// Records in file order.
    pub fn records(&self) -> &[ParsedTransaction] {
        &self.records
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    /// Contents of one line without its terminator.
    pub fn line(&self, number: usize) -> &'a str {
        self.index.line(self.text, number)
    }

    /// Text of the given lines, terminators included.
    pub fn slice_lines(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.index.offset(start)..self.index.offset(end)]
    }
}

/// Parse `text` into transactions in file order.
pub fn parse_transactions(text: &str) -> Vec<Transaction> {
    Snapshot::parse(text)
        .records
        .into_iter()
        .map(|record| record.transaction)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_counts_and_slices() {
        let text = "2024/01/01 A\n  X  $1\n\n2024/01/10 B\n  X  $2\n";
        let snapshot = Snapshot::parse(text);
        assert_eq!(snapshot.total_count(), 2);
        let first = &snapshot.records()[0];
        assert_eq!(
            snapshot.slice_lines(first.line_range.start, first.line_range.end),
            "2024/01/01 A\n  X  $1\n\n"
        );
        assert_eq!(snapshot.slice_lines(3, 5), "2024/01/10 B\n  X  $2\n");
    }

    #[test]
    fn test_parse_transactions_file_order() {
        let txns = parse_transactions("2024/01/01 A\n  X  $1\n2024/01/10 B\n  X  $2\n");
        assert_eq!(txns[0].payee, "A");
        assert_eq!(txns[1].payee, "B");
    }
}
