//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure: I/O, report tool, configuration.
    pub const GENERAL: i32 = 1;

    /// Transaction ID, journal file or config not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid transaction input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Rows shown by `list` when no limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 20;
