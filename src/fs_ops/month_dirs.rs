//! The twelve month folders ("01".."12") under the destination root.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{PhotoSortError, Result};

pub const MONTH_CODES: [&str; 12] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
];

/// Directory for `month` ("MM") under `root`.
pub fn month_dir(root: &Path, month: &str) -> PathBuf {
    root.join(month)
}

/// Create every month folder that is missing.
///
/// An existing entry with a month name (directory, file, or symlink, dangling
/// or not) counts as done.
/// In dry-run mode nothing is created; the paths are still returned.
pub fn ensure_month_dirs(root: &Path, dry_run: bool) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::with_capacity(MONTH_CODES.len());
    for month in MONTH_CODES {
        let dir = month_dir(root, month);
        // symlink_metadata: a dangling link still occupies the name.
        if fs::symlink_metadata(&dir).is_ok() {
            debug!(path = %dir.display(), "month directory present");
        } else if dry_run {
            info!(action = "mkdir -p", path = %dir.display(), "dry-run");
        } else {
            fs::create_dir_all(&dir).map_err(|source| PhotoSortError::DirectoryCreation {
                path: dir.clone(),
                source,
            })?;
            debug!(path = %dir.display(), "created month directory");
        }
        dirs.push(dir);
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_all_twelve() {
        let td = tempdir().unwrap();
        let dirs = ensure_month_dirs(td.path(), false).unwrap();
        assert_eq!(dirs.len(), 12);
        for m in MONTH_CODES {
            assert!(td.path().join(m).is_dir(), "missing {m}");
        }
    }

    #[test]
    fn idempotent_and_tolerates_existing_file() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("05"), b"not a dir").unwrap();
        ensure_month_dirs(td.path(), false).unwrap();
        ensure_month_dirs(td.path(), false).unwrap();
        assert!(td.path().join("05").is_file());
        assert!(td.path().join("06").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_present() {
        let td = tempdir().unwrap();
        std::os::unix::fs::symlink(td.path().join("gone"), td.path().join("05")).unwrap();
        let dirs = ensure_month_dirs(td.path(), false).unwrap();
        assert_eq!(dirs[4], td.path().join("05"));
        assert!(fs::symlink_metadata(td.path().join("05")).unwrap().file_type().is_symlink());
        assert!(td.path().join("04").is_dir());
        assert!(td.path().join("06").is_dir());
    }

    #[test]
    fn dry_run_creates_nothing() {
        let td = tempdir().unwrap();
        let dirs = ensure_month_dirs(td.path(), true).unwrap();
        assert_eq!(dirs[1], td.path().join("02"));
        assert!(!td.path().join("02").exists());
    }

    #[test]
    fn creation_failure_is_reported() {
        let td = tempdir().unwrap();
        let root = td.path().join("root");
        fs::write(&root, b"file in the way").unwrap();
        let err = ensure_month_dirs(&root, false).unwrap_err();
        assert!(matches!(err, PhotoSortError::DirectoryCreation { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
