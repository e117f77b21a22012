//! Atomic file writes.
//!
//! 1. Write content to `.{filename}.tmp` in the target's directory
//! 2. Sync the temp file to disk
//! 3. Rename it over the target
//!
//! `std::fs::rename` replaces an existing target on both POSIX and Windows.
//! Source and destination share a directory, so the rename stays on one
//! filesystem.

use crate::error::{PairgenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`.
///
/// The parent directory must already exist; a missing one is an
/// `IoFailure` on `path`. On failure the temp file is removed and the target
/// is left untouched.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content).map_err(|e| PairgenError::io(path, e))?;
    replace(&temp_path, path)
}

/// Temp file path next to the target: `.{filename}.tmp`.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        PairgenError::io(
            target,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid output file name"),
        )
    })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if written.is_err() {
        let _ = fs::remove_file(path);
    }
    written
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        PairgenError::io(target, e)
    })?;

    // Persist the directory entry; opening a directory fails on Windows.
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}
