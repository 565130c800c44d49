//! Post-write hook.

use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

/// Run `bash <script>` after a successful write.
///
/// The journal is already written when this runs, so a failing hook is only
/// reported, never returned.
pub fn run_after_write_hook(script: &str, journal_path: &Path) {
    debug!(script, "running after_write hook");
    let status = Command::new("bash")
        .arg(script)
        .env("LEDGER_FILE", journal_path)
        .status();
    match status {
        Ok(status) if status.success() => {}
        Ok(status) => warn!(script, %status, "after_write hook failed"),
        Err(e) => warn!(script, error = %e, "after_write hook could not be started"),
    }
}
