//! Base/extension view over a file name.
//!
//! The split happens at the *last* period only, so `archive.tar.gz` has base
//! `archive.tar` and extension `gz`. A name without any period has no extension.

use crate::errors::{PhotoSortError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileName<'a> {
    raw: &'a str,
    dot: Option<usize>,
}

impl<'a> FileName<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            dot: raw.rfind('.'),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Everything before the last period (the whole name when there is none).
    pub fn base(&self) -> &'a str {
        match self.dot {
            Some(i) => &self.raw[..i],
            None => self.raw,
        }
    }

    /// Everything after the last period.
    pub fn extension(&self) -> Option<&'a str> {
        self.dot.map(|i| &self.raw[i + 1..])
    }

    /// Extension, or `MalformedName` when missing or empty.
    pub fn require_extension(&self) -> Result<&'a str> {
        match self.extension() {
            None => Err(PhotoSortError::malformed(self.raw, "no extension")),
            Some("") => Err(PhotoSortError::malformed(self.raw, "empty extension")),
            Some(ext) => Ok(ext),
        }
    }
}
