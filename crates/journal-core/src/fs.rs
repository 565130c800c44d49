//! Filesystem helpers for replacing a file without partial writes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Write `data` to `destination` through a synced temp file in the same
/// directory, then rename it into place.
///
/// On failure the temp file is removed and `destination` still holds its
/// previous contents.
pub fn write_atomic(destination: &Path, data: &[u8]) -> io::Result<()> {
    let temp_path = temp_sibling(destination)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;
    if let Err(e) = file.write_all(data).and_then(|_| file.sync_all()) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(file);

    rename_with_fallback(&temp_path, destination)
}

/// Hidden, uniquely named path next to `path`.
pub fn temp_sibling(path: &Path) -> io::Result<PathBuf> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let filename = path.file_name().and_then(|name| name.to_str()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid journal filename: {}", path.display()),
        )
    })?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("System time error: {}", e)))?
        .as_nanos();

    Ok(parent.join(format!(".{}.{}.{}.tmp", filename, std::process::id(), nanos)))
}

/// Rename, removing an existing destination first where the platform
/// refuses to rename over it. The temp file is cleaned up if both attempts
/// fail.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
