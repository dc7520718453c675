//! Directory listings.
//! - Source: one level deep, regular files only, in enumeration order.
//! - Destination: every entry name, used to seed collision checks.
//!
//! Notes:
//! - walkdir is not sorted here, so order is whatever the OS returns.
//! - Symlinks are not followed; a symlinked entry is skipped as a source.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::{PhotoSortError, Result};

fn listing_error(dir: &Path, e: walkdir::Error) -> PhotoSortError {
    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
    PhotoSortError::Metadata {
        path,
        source: e.into_io_error().unwrap_or_else(|| io::Error::other("directory walk failed")),
    }
}

/// Regular files directly inside `dir`.
pub fn list_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| listing_error(dir, e))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        } else {
            debug!(path = %entry.path().display(), "skipping non-regular entry");
        }
    }
    Ok(files)
}

/// Names of all entries directly inside `dir`; empty when `dir` does not exist.
pub fn list_names(dir: &Path) -> Result<HashSet<String>> {
    if !dir.exists() {
        return Ok(HashSet::new());
    }
    let mut names = HashSet::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| listing_error(dir, e))?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
