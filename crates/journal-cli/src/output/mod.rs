//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying transactions
//! and reports in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::print_json;
pub use text::{print_accounts, print_report, print_transaction, print_transaction_list};
