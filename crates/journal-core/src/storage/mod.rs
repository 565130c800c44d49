//! Where journal text lives.
//!
//! The engine only ever needs the whole text in and the whole text out, so
//! a backend is a [`TextSource`]: read everything, write everything.

mod file;
mod memory;
mod traits;

pub use file::FileTextSource;
pub use memory::MemoryTextSource;
pub use traits::TextSource;
