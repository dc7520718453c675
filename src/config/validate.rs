//! Config validation logic.
//! Verifies the source directory exists and is readable, the destination root is usable,
//! and numeric limits are sane. Runs before anything on disk changes.

use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use crate::errors::{PhotoSortError, Result};

use super::types::Config;

impl Config {
    /// Validate paths and limits; nothing is created or moved here.
    pub fn validate(&self) -> Result<()> {
        if self.max_collision_attempts == 0 {
            return Err(PhotoSortError::InvalidArguments(
                "max collision attempts must be at least 1".into(),
            ));
        }

        // 1) Source: must exist, be a directory, and be readable.
        ensure_dir_exists_and_is_dir(&self.source_dir, "source directory")?;
        ensure_readable(&self.source_dir, "source directory")?;

        // 2) Destination root: may be missing (created with the month folders) but not a file.
        if self.dest_root.exists() && !self.dest_root.is_dir() {
            error!("destination root is not a directory: {}", self.dest_root.display());
            return Err(invalid(&self.dest_root, "destination root is not a directory"));
        }

        if same_dir(&self.source_dir, &self.dest_root) {
            debug!("source is also the destination root; month folders in it are not sources");
        }

        info!(
            "Config validated: source='{}' dest_root='{}' rename={} dry_run={}",
            self.source_dir.display(),
            self.dest_root.display(),
            self.rename,
            self.dry_run
        );
        Ok(())
    }
}

fn invalid(path: &Path, reason: &str) -> PhotoSortError {
    PhotoSortError::InvalidSourceDirectory {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Both paths exist and resolve to the same directory.
fn same_dir(a: &Path, b: &Path) -> bool {
    match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        return Err(invalid(path, "does not exist"));
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        return Err(invalid(path, "not a directory"));
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path, name: &str) -> Result<()> {
    fs::read_dir(path).map_err(|e| {
        error!("{name} is not readable: {}: {e}", path.display());
        invalid(path, &format!("cannot read directory: {e}"))
    })?;
    debug!("{name} readable: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_source_is_invalid_source_directory() {
        let td = tempdir().unwrap();
        let cfg = Config::new(td.path().join("nope"), td.path(), false);
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, PhotoSortError::InvalidSourceDirectory { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn file_as_source_is_rejected() {
        let td = tempdir().unwrap();
        let f = td.path().join("photo.jpg");
        fs::write(&f, b"x").unwrap();
        let err = Config::new(&f, td.path(), false).validate().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn file_as_dest_root_is_rejected() {
        let td = tempdir().unwrap();
        let f = td.path().join("root");
        fs::write(&f, b"x").unwrap();
        let err = Config::new(td.path(), &f, false).validate().unwrap_err();
        assert!(matches!(err, PhotoSortError::InvalidSourceDirectory { .. }));
    }

    #[test]
    fn zero_attempts_is_invalid_arguments() {
        let td = tempdir().unwrap();
        let mut cfg = Config::new(td.path(), td.path(), true);
        cfg.max_collision_attempts = 0;
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, PhotoSortError::InvalidArguments(_)));
    }

    #[test]
    fn same_dir_sees_through_relative_spelling() {
        let td = tempdir().unwrap();
        fs::create_dir(td.path().join("a")).unwrap();
        assert!(same_dir(td.path(), &td.path().join("a").join("..")));
        assert!(!same_dir(td.path(), &td.path().join("a")));
        assert!(!same_dir(td.path(), &td.path().join("missing")));
    }

    #[test]
    fn missing_dest_root_is_allowed() {
        let td = tempdir().unwrap();
        let cfg = Config::new(td.path(), td.path().join("sorted"), false);
        cfg.validate().unwrap();
    }
}
