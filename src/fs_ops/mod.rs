//! Filesystem operations: month folders, listings, and the move primitive.

mod atomic;
mod helpers;
mod listing;
mod month_dirs;
mod util;

pub use atomic::{FileMover, RenameMover};
pub use helpers::io_error_with_help_io;
pub use listing::{list_names, list_source_files};
pub use month_dirs::{MONTH_CODES, ensure_month_dirs, month_dir};

pub(crate) use util::display_name;
