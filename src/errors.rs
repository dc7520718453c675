//! Typed error definitions for photo_sort.
//! One variant per failure mode; the binary maps them to exit codes and log fields.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoSortError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid directory {path}: {reason}")]
    InvalidSourceDirectory { path: PathBuf, reason: String },

    #[error("Failed to create month directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read modification time of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed file name '{name}': {reason}")]
    MalformedName { name: String, reason: &'static str },

    #[error("No free name for '{candidate}' after {attempts} attempts")]
    CollisionExhausted { candidate: String, attempts: u32 },

    #[error("Failed to move '{}' -> '{}': {detail}", src.display(), dest.display())]
    MoveFailure {
        src: PathBuf,
        dest: PathBuf,
        detail: String,
    },
}

impl PhotoSortError {
    /// Stable label used as the `kind` field in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PhotoSortError::InvalidArguments(_) => "invalid_arguments",
            PhotoSortError::InvalidSourceDirectory { .. } => "invalid_source_directory",
            PhotoSortError::DirectoryCreation { .. } => "directory_creation",
            PhotoSortError::Metadata { .. } => "metadata",
            PhotoSortError::MalformedName { .. } => "malformed_name",
            PhotoSortError::CollisionExhausted { .. } => "collision_exhausted",
            PhotoSortError::MoveFailure { .. } => "move_failure",
        }
    }

    /// Process exit status for this error.
    /// 2 matches clap's usage errors; 3 covers problems found before any file is touched.
    pub fn exit_code(&self) -> u8 {
        match self {
            PhotoSortError::InvalidArguments(_) => 2,
            PhotoSortError::InvalidSourceDirectory { .. }
            | PhotoSortError::DirectoryCreation { .. } => 3,
            _ => 1,
        }
    }

    pub(crate) fn malformed(name: impl Into<String>, reason: &'static str) -> Self {
        PhotoSortError::MalformedName {
            name: name.into(),
            reason,
        }
    }
}

pub type Result<T, E = PhotoSortError> = std::result::Result<T, E>;
