//! UI primitives for the Journal CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: String utilities for cells
//!
//! # Usage
//!
//! ```ignore
//! let ui = ctx.ui_context(args.json, args.format.as_deref());
//!
//! if ui.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ui, "list", None));
//! println!("{}", table(&ui, &columns, &rows));
//! println!("{}", hint(&ui, "journal show <id>"));
//! ```

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputFormat;
pub use theme::Badge;

pub use render::{badge, header, hint, kv, print, print_error, receipt, table, Column};

pub use format::{indent_account, is_negative_amount, truncate};
