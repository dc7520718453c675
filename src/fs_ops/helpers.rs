//! I/O helper utilities.
//!
//! Enrich io::Error with the operation, the path and a platform-aware hint so
//! a failed move or mkdir tells the user what to check.
//!
//! Usage:
//!   fs::rename(a, b).map_err(io_error_with_help_io("rename to", b))?;

use std::io;
use std::path::Path;

/// Short explanation for well-known raw OS codes.
#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions",
        libc::EXDEV => "source and destination are on different filesystems; rename cannot cross devices",
        libc::EBUSY => "resource busy; another process may be using the file",
        libc::ENOENT => "path not found; the file may have been removed meanwhile",
        libc::EEXIST => "destination already exists",
        libc::ENOSPC => "insufficient space on device",
        libc::EROFS => "read-only filesystem; cannot write here",
        libc::ENOTDIR => "a path component is not a directory; check the month folders",
        libc::ENAMETOOLONG => "filename or path too long",
        libc::ELOOP => "too many symbolic link levels (ELOOP); possible symlink cycle",
        _ => return None,
    };
    Some(hint)
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        5 => "access denied; check permissions",            // ERROR_ACCESS_DENIED
        17 => "not same device; rename cannot cross drives", // ERROR_NOT_SAME_DEVICE
        32 => "sharing violation; file is in use",            // ERROR_SHARING_VIOLATION
        2 | 3 => "path not found; verify it exists",          // FILE/PATH NOT FOUND
        80 | 183 => "destination already exists",             // ERROR_FILE_EXISTS / ALREADY_EXISTS
        112 => "insufficient disk space",                     // ERROR_DISK_FULL
        19 => "write protected / read-only media",            // ERROR_WRITE_PROTECT
        206 => "filename or path too long",                   // ERROR_FILENAME_EXCED_RANGE
        _ => return None,
    };
    Some(hint)
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; refusing to overwrite"),
        _ => None,
    }
}

/// Format "<op> '<path>': <error> — <hint> [os code: N]".
pub(crate) fn describe(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => os_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(" — ");
        msg.push_str(h);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Adapter for io::Result code; keeps the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), describe(op, path, &e))
}
