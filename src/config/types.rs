//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - ScanPolicy and TimeBasis select how destinations are inspected and how mtimes are rendered.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{DEFAULT_MAX_COLLISION_ATTEMPTS, DEST_ROOT_DEFAULT};

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// When destination directories are listed to learn which names are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ScanPolicy {
    /// List a month directory the first time it is needed, then track placements in memory.
    Once,
    /// Re-list the month directory before every resolution, merged with in-memory reservations.
    #[default]
    BeforeEachCheck,
}

/// Clock used to render a modification time into date/time codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBasis {
    #[default]
    Utc,
    Local,
}

/// Runtime configuration used by the organizer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Flat directory whose files get sorted
    pub source_dir: PathBuf,
    /// Directory holding the twelve month folders
    pub dest_root: PathBuf,
    /// Rename files to `YYYYMMDD_HHMMSS.ext`
    pub rename: bool,
    /// If true, report placements but do not modify the filesystem
    pub dry_run: bool,
    /// Upper bound on names tried per file when resolving collisions
    pub max_collision_attempts: u32,
    pub scan_policy: ScanPolicy,
    pub time_basis: TimeBasis,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Emit JSON log lines instead of compact text
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            dest_root: PathBuf::from(DEST_ROOT_DEFAULT),
            rename: false,
            dry_run: false,
            max_collision_attempts: DEFAULT_MAX_COLLISION_ATTEMPTS,
            scan_policy: ScanPolicy::default(),
            time_basis: TimeBasis::default(),
            log_level: LogLevel::Normal,
            log_file: None,
            json_logs: false,
        }
    }
}

impl Config {
    /// Construct a Config for a source/destination pair; other fields use defaults.
    pub fn new(source_dir: impl Into<PathBuf>, dest_root: impl Into<PathBuf>, rename: bool) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_root: dest_root.into(),
            rename,
            ..Default::default()
        }
    }
}
