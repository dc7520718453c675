//! The move primitive.
//! - `FileMover` is the seam the planner calls; tests swap in failing movers.
//! - `RenameMover` performs a same-filesystem rename and never overwrites.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;

use super::helpers::io_error_with_help_io;
use super::util::fsync_dir;

/// Move `src` to `dest` as one operation. Errors are reported, never retried.
pub trait FileMover {
    fn move_file(&self, src: &Path, dest: &Path) -> io::Result<()>;
}

impl<M: FileMover + ?Sized> FileMover for &M {
    fn move_file(&self, src: &Path, dest: &Path) -> io::Result<()> {
        (**self).move_file(src, dest)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenameMover;

impl FileMover for RenameMover {
    fn move_file(&self, src: &Path, dest: &Path) -> io::Result<()> {
        // rename(2) silently replaces an existing file; refuse instead.
        if dest.try_exists()? {
            return Err(io_error_with_help_io("rename onto", dest)(io::Error::from(
                io::ErrorKind::AlreadyExists,
            )));
        }

        fs::rename(src, dest).map_err(io_error_with_help_io("rename to", dest))?;

        if let Some(parent) = dest.parent() {
            // Ignore fsync errors to avoid turning a successful rename into a failure.
            let _ = fsync_dir(parent);
        }
        Ok(())
    }
}
