//! Config module.
//! Provides configuration types, path safety helpers, and validation.
//! Settings come from command-line flags only.

pub mod paths;
pub mod types;
mod validate;

pub use paths::path_has_symlink_ancestor;
pub use types::{Config, LogLevel, ScanPolicy, TimeBasis};

/// Month directories live here unless `--dest-root` says otherwise.
pub const DEST_ROOT_DEFAULT: &str = ".";
/// Names tried per file (candidate included) before giving up on collisions.
pub const DEFAULT_MAX_COLLISION_ATTEMPTS: u32 = 10;
