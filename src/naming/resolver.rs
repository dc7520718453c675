//! Target-name resolution for one source file.

use std::collections::HashSet;

use tracing::info;

use crate::config::DEFAULT_MAX_COLLISION_ATTEMPTS;
use crate::errors::Result;
use crate::timestamp::Timestamp;

use super::canonical::{canonical_name, is_canonical};
use super::collision::disambiguate;

/// Outcome of resolving a name: what we wanted and what we got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Name before collision handling (source name or canonical name).
    pub candidate: String,
    /// Free name to place the file under.
    pub target: String,
}

impl Resolution {
    /// True when the candidate was taken and a numbered variant was chosen.
    pub fn collided(&self) -> bool {
        self.candidate != self.target
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NameResolver {
    max_attempts: u32,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COLLISION_ATTEMPTS)
    }
}

impl NameResolver {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Name the file would get if nothing collided.
    pub fn candidate(&self, source: &str, ts: &Timestamp, rename: bool) -> Result<String> {
        if !rename || is_canonical(source) {
            Ok(source.to_string())
        } else {
            canonical_name(ts, source)
        }
    }

    /// Compute the final name for `source` given the names already taken.
    /// The caller reserves `target` once the file is actually placed.
    pub fn resolve(
        &self,
        source: &str,
        ts: &Timestamp,
        rename: bool,
        used: &HashSet<String>,
    ) -> Result<Resolution> {
        let candidate = self.candidate(source, ts, rename)?;
        let target = disambiguate(&candidate, used, self.max_attempts)?;
        let resolution = Resolution { candidate, target };
        if resolution.collided() {
            info!(
                source,
                candidate = %resolution.candidate,
                target = %resolution.target,
                "name already taken; using numbered variant"
            );
        }
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PhotoSortError;
    use chrono::NaiveDate;

    fn ts() -> Timestamp {
        Timestamp::from_naive(
            NaiveDate::from_ymd_opt(2024, 2, 6)
                .unwrap()
                .and_hms_opt(12, 34, 56)
                .unwrap(),
        )
    }

    #[test]
    fn no_rename_keeps_source_name() {
        let r = NameResolver::default()
            .resolve("photo.jpg", &ts(), false, &HashSet::new())
            .unwrap();
        assert_eq!(r.target, "photo.jpg");
        assert!(!r.collided());
    }

    #[test]
    fn no_rename_tolerates_missing_extension_without_collision() {
        let r = NameResolver::default()
            .resolve("README", &ts(), false, &HashSet::new())
            .unwrap();
        assert_eq!(r.target, "README");
    }

    #[test]
    fn rename_builds_canonical_name() {
        let r = NameResolver::default()
            .resolve("photo.jpg", &ts(), true, &HashSet::new())
            .unwrap();
        assert_eq!(r.target, "20240206_123456.jpg");
    }

    #[test]
    fn canonical_source_is_left_alone() {
        // The timestamp disagrees with the name on purpose: canonical names are trusted.
        let r = NameResolver::default()
            .resolve("19990101_000000.png", &ts(), true, &HashSet::new())
            .unwrap();
        assert_eq!(r.target, "19990101_000000.png");
    }

    #[test]
    fn rename_without_extension_fails() {
        let err = NameResolver::default()
            .resolve("noext", &ts(), true, &HashSet::new())
            .unwrap_err();
        assert!(matches!(err, PhotoSortError::MalformedName { .. }));
    }

    #[test]
    fn collision_applies_to_unrenamed_names_too() {
        let used: HashSet<String> = ["photo.jpg".to_string()].into_iter().collect();
        let r = NameResolver::default()
            .resolve("photo.jpg", &ts(), false, &used)
            .unwrap();
        assert_eq!(r.candidate, "photo.jpg");
        assert_eq!(r.target, "photo_1.jpg");
        assert!(r.collided());
    }

    #[test]
    fn smaller_bound_is_honored() {
        let used: HashSet<String> = ["a.jpg", "a_1.jpg"].iter().map(|s| s.to_string()).collect();
        let err = NameResolver::new(2)
            .resolve("a.jpg", &ts(), false, &used)
            .unwrap_err();
        assert!(matches!(err, PhotoSortError::CollisionExhausted { attempts: 2, .. }));
    }
}
