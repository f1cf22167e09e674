//! Filesystem helpers for reading sources and writing output.

use std::io;
use std::path::{Path, PathBuf};

/// Reads `path`, or returns `None` if it cannot be opened or read.
pub(super) fn read_if_readable(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(error) => {
            tracing::debug!(path = %path.display(), %error, "skipping unreadable file");
            None
        }
    }
}

/// Replaces `path` with `bytes` atomically.
///
/// # Atomic Writes
///
/// 1. Write to `{path}.tmp`
/// 2. Rename `{path}.tmp` to `{path}`
///
/// The file is either fully written or left untouched.
pub(super) fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // settings.ini -> settings.ini.tmp, not settings.tmp
    let temp_path = PathBuf::from(format!("{}.tmp", path.display()));
    std::fs::write(&temp_path, bytes)?;
    std::fs::rename(&temp_path, path)?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
