//! Per-file orchestration: timestamp → month folder → target name → move.
//!
//! Files are handled one at a time in listing order. The first error stops the
//! run; files moved before it stay where they are.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::Config;
use crate::errors::{PhotoSortError, Result};
use crate::fs_ops::{FileMover, RenameMover, display_name, ensure_month_dirs, list_source_files, month_dir};
use crate::naming::{NameResolver, Resolution};
use crate::timestamp::Timestamp;
use crate::used_names::UsedNames;

/// Where one file is going, computed before anything moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub source: PathBuf,
    pub source_name: String,
    pub month: String,
    pub dest_dir: PathBuf,
    pub resolution: Resolution,
}

impl Placement {
    pub fn dest(&self) -> PathBuf {
        self.dest_dir.join(&self.resolution.target)
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub source_name: String,
    pub candidate: String,
    pub target_name: String,
    pub month: String,
    pub dry_run: bool,
}

impl MoveOutcome {
    /// The file ended up under a different name than it had.
    pub fn renamed(&self) -> bool {
        self.source_name != self.target_name
    }

    /// The preferred name was taken and a numbered variant was used.
    pub fn collided(&self) -> bool {
        self.candidate != self.target_name
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub moved: usize,
    pub renamed: usize,
    pub collided: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &MoveOutcome) {
        self.moved += 1;
        if outcome.renamed() {
            self.renamed += 1;
        }
        if outcome.collided() {
            self.collided += 1;
        }
    }
}

pub struct MovePlanner<'a, M> {
    config: &'a Config,
    resolver: NameResolver,
    used: UsedNames,
    mover: M,
}

impl<'a, M: FileMover> MovePlanner<'a, M> {
    pub fn new(config: &'a Config, mover: M) -> Self {
        Self {
            config,
            resolver: NameResolver::new(config.max_collision_attempts),
            used: UsedNames::new(config.scan_policy),
            mover,
        }
    }

    /// Replace the used-name state (e.g. seeded with reservations).
    pub fn with_used_names(mut self, used: UsedNames) -> Self {
        self.used = used;
        self
    }

    pub fn used_names(&self) -> &UsedNames {
        &self.used
    }

    /// Compute the placement for `src` without moving it.
    pub fn plan(&mut self, src: &Path) -> Result<Placement> {
        let source_name = src
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PhotoSortError::malformed(display_name(src), "not valid UTF-8"))?
            .to_string();

        let ts = Timestamp::read_modified(src, self.config.time_basis)?;
        let month = ts.month_code();
        let dest_dir = month_dir(&self.config.dest_root, &month);

        let used = self.used.names_for(&dest_dir)?;
        let resolution = self
            .resolver
            .resolve(&source_name, &ts, self.config.rename, used)?;

        Ok(Placement {
            source: src.to_path_buf(),
            source_name,
            month,
            dest_dir,
            resolution,
        })
    }

    /// Plan and move one file, then reserve its name.
    pub fn process(&mut self, src: &Path) -> Result<MoveOutcome> {
        let placement = self.plan(src)?;
        let dest = placement.dest();

        if self.config.dry_run {
            info!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
        } else {
            self.mover.move_file(src, &dest).map_err(|e| {
                error!(src = %src.display(), dest = %dest.display(), error = %e, "Move failed");
                PhotoSortError::MoveFailure {
                    src: src.to_path_buf(),
                    dest: dest.clone(),
                    detail: e.to_string(),
                }
            })?;
            info!(src = %src.display(), dest = %dest.display(), "Moved file");
        }

        self.used
            .reserve(&placement.dest_dir, placement.resolution.target.clone());

        Ok(MoveOutcome {
            source: placement.source,
            dest,
            source_name: placement.source_name,
            candidate: placement.resolution.candidate,
            target_name: placement.resolution.target,
            month: placement.month,
            dry_run: self.config.dry_run,
        })
    }

    /// Process `files` in order, calling `report` after each one. Stops at the first error.
    pub fn run<F>(&mut self, files: &[PathBuf], mut report: F) -> Result<RunSummary>
    where
        F: FnMut(&MoveOutcome),
    {
        let mut summary = RunSummary::default();
        for src in files {
            let outcome = self.process(src)?;
            summary.record(&outcome);
            report(&outcome);
        }
        debug!(?summary, "run finished");
        Ok(summary)
    }
}

/// Validate, create month folders, list the source and move everything.
pub fn organize<F>(config: &Config, report: F) -> Result<RunSummary>
where
    F: FnMut(&MoveOutcome),
{
    config.validate()?;
    ensure_month_dirs(&config.dest_root, config.dry_run)?;
    let files = list_source_files(&config.source_dir)?;
    info!(count = files.len(), source = %config.source_dir.display(), "Sorting files");
    MovePlanner::new(config, RenameMover).run(&files, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanPolicy;
    use chrono::{TimeZone, Utc};
    use filetime::FileTime;
    use std::fs;
    use std::io;
    use tempfile::tempdir;

    fn touch(path: &Path, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) {
        fs::write(path, path.to_string_lossy().as_bytes()).unwrap();
        let t = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
        filetime::set_file_mtime(path, FileTime::from_unix_time(t.timestamp(), 0)).unwrap();
    }

    struct Refuse;
    impl FileMover for Refuse {
        fn move_file(&self, _src: &Path, _dest: &Path) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        }
    }

    #[test]
    fn plan_has_no_side_effects() {
        let td = tempdir().unwrap();
        let src = td.path().join("photo.jpg");
        touch(&src, 2024, 2, 6, 12, 34, 56);
        let cfg = Config::new(td.path(), td.path(), true);

        let mut planner = MovePlanner::new(&cfg, RenameMover);
        let p = planner.plan(&src).unwrap();
        assert_eq!(p.month, "02");
        assert_eq!(p.dest(), td.path().join("02").join("20240206_123456.jpg"));
        assert!(src.exists());
        assert!(!planner.used_names().contains(&p.dest_dir, "20240206_123456.jpg"));
    }

    #[test]
    fn same_second_files_get_distinct_targets() {
        let td = tempdir().unwrap();
        let a = td.path().join("a.jpg");
        let b = td.path().join("b.jpg");
        touch(&a, 2024, 2, 6, 12, 34, 56);
        touch(&b, 2024, 2, 6, 12, 34, 56);
        let mut cfg = Config::new(td.path(), td.path(), true);
        cfg.dry_run = true;
        cfg.scan_policy = ScanPolicy::Once;

        let mut planner = MovePlanner::new(&cfg, RenameMover);
        let mut targets = Vec::new();
        let summary = planner
            .run(&[a.clone(), b.clone()], |o| targets.push(o.target_name.clone()))
            .unwrap();
        assert_eq!(targets, vec!["20240206_123456.jpg", "20240206_123456_1.jpg"]);
        assert_eq!(summary, RunSummary { moved: 2, renamed: 2, collided: 1 });
        assert!(a.exists() && b.exists(), "dry run must not move");
    }

    #[test]
    fn move_failure_stops_and_names_paths() {
        let td = tempdir().unwrap();
        let a = td.path().join("a.jpg");
        touch(&a, 2024, 7, 1, 0, 0, 0);
        let cfg = Config::new(td.path(), td.path(), false);

        let mut planner = MovePlanner::new(&cfg, Refuse);
        let mut reported = 0;
        let err = planner.run(&[a.clone()], |_| reported += 1).unwrap_err();
        match &err {
            PhotoSortError::MoveFailure { src, dest, .. } => {
                assert_eq!(src, &a);
                assert_eq!(dest, &td.path().join("07").join("a.jpg"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(reported, 0);
        assert!(!planner.used_names().contains(&td.path().join("07"), "a.jpg"));
    }

    #[test]
    fn seeded_reservations_force_variants() {
        let td = tempdir().unwrap();
        let a = td.path().join("a.jpg");
        touch(&a, 2024, 3, 1, 8, 0, 0);
        let mut cfg = Config::new(td.path(), td.path(), false);
        cfg.dry_run = true;
        let seeded = UsedNames::new(cfg.scan_policy).with_names(td.path().join("03"), ["a.jpg"]);

        let mut planner = MovePlanner::new(&cfg, RenameMover).with_used_names(seeded);
        let outcome = planner.process(&a).unwrap();
        assert_eq!(outcome.target_name, "a_1.jpg");
        assert!(outcome.renamed());
        assert!(outcome.collided());
        assert!(outcome.dry_run);
    }
}
