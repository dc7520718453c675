//! Path safety helpers.
//! Detects symlinked ancestors so log files are never written through a redirected directory.

use std::fs;
use std::io;
use std::path::Path;

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn plain_directory_has_no_symlink_ancestor() {
        let td = tempdir().unwrap();
        let real = dunce::canonicalize(td.path()).unwrap();
        let log = real.join("logs").join("photo_sort.log");
        assert!(!path_has_symlink_ancestor(&log).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_parent_is_detected() {
        let td = tempdir().unwrap();
        let real = dunce::canonicalize(td.path()).unwrap();
        let target = real.join("target");
        fs::create_dir_all(&target).unwrap();
        let link = real.join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(path_has_symlink_ancestor(&link.join("photo_sort.log")).unwrap());
    }

    #[test]
    fn relative_bare_name_is_fine() {
        assert!(!path_has_symlink_ancestor(Path::new("photo_sort.log")).unwrap());
    }
}
