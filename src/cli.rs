//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Exactly one positional SOURCE_DIR; missing or extra positionals are usage errors (exit 2).
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::types::{Config, LogLevel, ScanPolicy, TimeBasis};
use crate::config::DEFAULT_MAX_COLLISION_ATTEMPTS;

/// Sort photos into month folders (01..12) by modification time.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sort a flat directory of photos into month folders by modification time"
)]
pub struct Args {
    /// Directory whose files are sorted (not recursive).
    #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath)]
    pub source_dir: PathBuf,

    /// Rename files to YYYYMMDD_HHMMSS.ext (names already in that form are kept).
    #[arg(short = 'r', long, help = "Rename files to YYYYMMDD_HHMMSS.ext")]
    pub rename: bool,

    /// Where the month folders live. Defaults to the current directory.
    #[arg(long, value_hint = ValueHint::DirPath, help = "Directory holding the month folders (default: .)")]
    pub dest_root: Option<PathBuf>,

    /// Dry-run: report placements but do not create folders or move files.
    #[arg(
        long,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Upper bound on names tried per file when the preferred one is taken.
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_COLLISION_ATTEMPTS,
        help = "Names to try per file before giving up on collisions"
    )]
    pub max_collision_attempts: u32,

    /// When to list month folders for existing names.
    #[arg(long, value_enum, default_value_t = ScanPolicy::BeforeEachCheck)]
    pub scan_policy: ScanPolicy,

    /// Render modification times in local time instead of UTC.
    #[arg(long, help = "Use local time instead of UTC for dates and months")]
    pub local_time: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(
        long,
        value_parser = LogLevel::from_str,
        help = "Set log level: quiet, normal, info, debug"
    )]
    pub log_level: Option<LogLevel>,

    /// Also append logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Source directory with stray shell quotes removed.
    pub fn resolved_source(&self) -> PathBuf {
        Self::sanitize_path(&self.source_dir)
    }

    #[inline]
    fn sanitize_path(p: &Path) -> PathBuf {
        Self::sanitize_str(&p.to_string_lossy())
    }

    #[inline]
    fn sanitize_str(s: &str) -> PathBuf {
        // PowerShell/CMD users sometimes end up with the quotes inside the argument.
        let trimmed = s.trim();
        let inner = if trimmed.len() >= 2
            && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
                || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
        {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed.trim_matches(|c: char| c == '\'' || c == '"')
        };
        PathBuf::from(inner)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI values to a Config (in-place). No-ops for unset optional flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        cfg.source_dir = self.resolved_source();
        if let Some(root) = &self.dest_root {
            cfg.dest_root = Self::sanitize_path(root);
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
        cfg.rename |= self.rename;
        cfg.dry_run |= self.dry_run;
        cfg.json_logs |= self.json;
        cfg.max_collision_attempts = self.max_collision_attempts;
        cfg.scan_policy = self.scan_policy;
        if self.local_time {
            cfg.time_basis = TimeBasis::Local;
        }
    }

    /// Build a Config from defaults plus these flags.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::default();
        self.apply_overrides(&mut cfg);
        cfg
    }
}

pub fn parse() -> Args {
    Args::parse()
}
