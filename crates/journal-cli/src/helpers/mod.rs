//! Helper functions for the Journal CLI.
//!
//! - **input**: reading transactions from flags or JSON
//! - **parsing**: parsing `--posting` and `--format` values

mod input;
mod parsing;

pub use input::{build_transaction, today};
pub use parsing::parse_output_format;
