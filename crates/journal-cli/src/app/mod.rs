//! Application-level utilities for the Journal CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for config and journal files
//! - The post-write hook

mod context;
mod hooks;
mod resolver;

pub use context::AppContext;
