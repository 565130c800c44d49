//! # Journal Core
//!
//! Parsing and editing of plain-text ledger journals, independent of the
//! CLI.
//!
//! The text file is the only store. Each read parses the whole file; each
//! mutation parses it again, rewrites the bytes of one record and writes the
//! whole file back.
//!
//! ## Architecture
//!
//! - **parse**: line classification and grouping into records
//! - **identity**: file order ↔ presentation order (id 0 = most recent)
//! - **format**: canonical text for a record
//! - **mutation**: insert/replace/delete as whole-text edits
//! - **storage**: text sources (file, memory)
//! - **journal**: the service tying these together
//! - **report**: running `ledger` and splitting its column output

pub mod error;
pub mod format;
pub mod fs;
pub mod identity;
pub mod journal;
pub mod model;
pub mod mutation;
pub mod parse;
pub mod report;
pub mod storage;

pub use error::{JournalError, Result};
pub use format::{format_transaction, Formatter, DEFAULT_AMOUNT_COLUMN};
pub use identity::{to_file_index, to_presentation_id};
pub use journal::Journal;
pub use model::{
    LineRange, ListedTransaction, NewPosting, NewTransaction, ParsedTransaction, Posting,
    Transaction,
};
pub use mutation::{Mutation, MutationPlanner};
pub use parse::{parse_transactions, Snapshot};
pub use report::{LedgerCommand, Report, ReportKind};
pub use storage::{FileTextSource, MemoryTextSource, TextSource};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
