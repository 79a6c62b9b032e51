use crate::error::{EngineError, Result};
use std::path::{Path, PathBuf};

/// Enumerate every entry directly inside `root`.
///
/// The listing is flat and unfiltered: subdirectories, hidden files and
/// binary files are all returned, and left to fail later when opened as
/// text. Listing order follows the directory and is unspecified.
///
/// # Errors
/// Returns `DirectoryNotFound` when `root` is missing or unreadable, and
/// `NotADirectory` when it exists but is not a directory.
pub fn list_dir(root: &Path) -> Result<Vec<PathBuf>> {
    let meta = std::fs::metadata(root).map_err(|e| EngineError::DirectoryNotFound {
        path: root.to_path_buf(),
        source: e,
    })?;

    if !meta.is_dir() {
        return Err(EngineError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(root).map_err(|e| EngineError::DirectoryNotFound {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EngineError::DirectoryNotFound {
            path: root.to_path_buf(),
            source: e,
        })?;
        files.push(entry.path());
    }

    Ok(files)
}
