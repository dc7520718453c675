//! Modification-time extraction.
//!
//! A file's mtime is read once and held as a calendar value; the month, date and
//! time codes are all formatted from that single value so they always agree.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use filetime::FileTime;

use crate::config::TimeBasis;
use crate::errors::{PhotoSortError, Result};

/// Calendar date and time-of-day taken from filesystem metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

/// `(month, date, time)` codes, e.g. `("02", "20240206", "123456")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeCodes {
    pub month: String,
    pub date: String,
    pub time: String,
}

impl Timestamp {
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    /// Render a UTC instant in the requested clock.
    pub fn from_utc(instant: DateTime<Utc>, basis: TimeBasis) -> Self {
        match basis {
            TimeBasis::Utc => Self(instant.naive_utc()),
            TimeBasis::Local => Self(instant.with_timezone(&Local).naive_local()),
        }
    }

    /// Read the last-modified time of `path`.
    pub fn read_modified(path: &Path, basis: TimeBasis) -> Result<Self> {
        let meta = fs::metadata(path).map_err(|source| PhotoSortError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
        let mtime = FileTime::from_last_modification_time(&meta);
        let instant = DateTime::<Utc>::from_timestamp(mtime.unix_seconds(), mtime.nanoseconds())
            .ok_or_else(|| PhotoSortError::Metadata {
                path: path.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("modification time out of range ({}s)", mtime.unix_seconds()),
                ),
            })?;
        Ok(Self::from_utc(instant, basis))
    }

    /// Two-digit month, "01".."12".
    pub fn month_code(&self) -> String {
        self.0.format("%m").to_string()
    }

    /// Eight-digit date, YYYYMMDD.
    pub fn date_code(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// Six-digit time, HHMMSS.
    pub fn time_code(&self) -> String {
        self.0.format("%H%M%S").to_string()
    }

    pub fn codes(&self) -> TimeCodes {
        TimeCodes {
            month: self.month_code(),
            date: self.date_code(),
            time: self.time_code(),
        }
    }
}
