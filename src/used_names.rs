//! Names occupied or reserved per destination directory.
//!
//! The planner owns one `UsedNames` per run. Depending on `ScanPolicy` the
//! on-disk listing is read once per directory or again before every lookup;
//! either way, names reserved during the run are kept in memory so two files
//! in one batch never get the same target.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ScanPolicy;
use crate::errors::Result;
use crate::fs_ops::list_names;

#[derive(Debug, Default)]
pub struct UsedNames {
    policy: ScanPolicy,
    dirs: HashMap<PathBuf, HashSet<String>>,
}

impl UsedNames {
    pub fn new(policy: ScanPolicy) -> Self {
        Self {
            policy,
            dirs: HashMap::new(),
        }
    }

    /// Start from a known set for `dir` (tests, or callers that already listed it).
    pub fn with_names<I, S>(mut self, dir: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dirs
            .entry(dir.into())
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Current set of taken names for `dir`, refreshed according to the scan policy.
    pub fn names_for(&mut self, dir: &Path) -> Result<&HashSet<String>> {
        let needs_scan = match self.policy {
            ScanPolicy::Once => !self.dirs.contains_key(dir),
            ScanPolicy::BeforeEachCheck => true,
        };
        if needs_scan {
            let on_disk = list_names(dir)?;
            debug!(dir = %dir.display(), count = on_disk.len(), "scanned destination");
            self.dirs.entry(dir.to_path_buf()).or_default().extend(on_disk);
        }
        Ok(&*self.dirs.entry(dir.to_path_buf()).or_default())
    }

    /// Record that `name` now lives (or will live) in `dir`.
    pub fn reserve(&mut self, dir: &Path, name: impl Into<String>) {
        self.dirs.entry(dir.to_path_buf()).or_default().insert(name.into());
    }

    /// Membership against what is currently known, without rescanning.
    pub fn contains(&self, dir: &Path, name: &str) -> bool {
        self.dirs.get(dir).is_some_and(|s| s.contains(name))
    }
}
