//! Core library for `photo_sort`.
//!
//! Sorts the files of one flat directory into month folders ("01".."12") by
//! last-modified time, optionally renaming each to `YYYYMMDD_HHMMSS.ext` and
//! resolving name collisions with `_1`, `_2`, ... suffixes.
//!
//! The binary is a thin wrapper: it parses flags into a [`Config`], sets up
//! logging, and calls [`organize`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod naming;
pub mod output;
pub mod planner;
pub mod timestamp;
pub mod used_names;

pub use config::{Config, LogLevel, ScanPolicy, TimeBasis, path_has_symlink_ancestor};
pub use errors::PhotoSortError;
pub use fs_ops::{FileMover, RenameMover, ensure_month_dirs, list_source_files};
pub use naming::{NameResolver, Resolution};
pub use planner::{MoveOutcome, MovePlanner, Placement, RunSummary, organize};
pub use timestamp::Timestamp;
pub use used_names::UsedNames;
