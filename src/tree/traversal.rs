//! Directory listing and prefix helpers used by the walker.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A single directory entry as seen by one read of its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    /// Determined without following symlinks.
    pub is_dir: bool,
}

/// Read the immediate children of `path`.
/// Any failure (listing, iterating, or reading a file type) is fatal.
pub fn read_entries(path: &Path, sort: bool) -> Result<Vec<DirEntry>> {
    let read_dir = std::fs::read_dir(path).map_err(|e| Error::traversal(path, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::traversal(path, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| Error::traversal(entry.path(), e))?;
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path(),
            is_dir: file_type.is_dir(),
        });
    }

    if sort {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(entries)
}

/// Return the only subdirectory of `path`, or `None` if it has zero or several.
/// Files and ignore rules play no part here.
pub fn sole_subdirectory(path: &Path) -> Result<Option<DirEntry>> {
    let mut subdirs = read_entries(path, false)?
        .into_iter()
        .filter(|entry| entry.is_dir);

    match (subdirs.next(), subdirs.next()) {
        (Some(only), None) => Ok(Some(only)),
        _ => Ok(None),
    }
}

/// Calculate the prefix for child entries
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}

/// Prefix for the children of a merged line; always a plain indent.
pub fn merged_child_prefix(current_prefix: &str) -> String {
    format!("{}    ", current_prefix)
}

/// Display name of the root directory, falling back to the full path for `/`.
pub fn root_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
