//! Collision resolution.
//!
//! Policy:
//! - The candidate is used as-is when nobody holds it.
//! - Otherwise "_1" is inserted before the extension, then the counter is bumped
//!   ("_2", "_3", ...) until a free name is found.
//! - At most `max_attempts` names are tried, the candidate included.
//!
//! Notes:
//! - Variants are always derived from the candidate's own base, so a canonical
//!   `20240206_123456.jpg` becomes `20240206_123456_1.jpg`, never `..._123457.jpg`.

use std::collections::HashSet;

use tracing::debug;

use crate::errors::{PhotoSortError, Result};

use super::file_name::FileName;

/// Return the first of `candidate`, `candidate_1`, `candidate_2`, ... absent from `used`.
pub fn disambiguate(candidate: &str, used: &HashSet<String>, max_attempts: u32) -> Result<String> {
    let parsed = FileName::parse(candidate);
    let mut name = candidate.to_string();
    let mut attempts: u32 = 1;

    while used.contains(&name) {
        if attempts >= max_attempts {
            debug!(candidate, attempts, "collision: every allowed name is taken");
            return Err(PhotoSortError::CollisionExhausted {
                candidate: candidate.to_string(),
                attempts,
            });
        }
        name = next_variant(&parsed, &name)?;
        attempts += 1;
    }
    Ok(name)
}

/// Name to try after `current` turned out to be taken.
///
/// `current` must be the candidate itself (`base.ext`) or one of its numbered
/// variants (`base_N.ext`); anything else is an internal invariant violation.
fn next_variant(candidate: &FileName<'_>, current: &str) -> Result<String> {
    let base = candidate.base();
    let ext = candidate.require_extension()?;

    if current == candidate.as_str() {
        return Ok(numbered(base, 1, ext));
    }

    let n = FileName::parse(current)
        .base()
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('_'))
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<u32>().ok())
        .filter(|_| current.ends_with(&format!(".{ext}")))
        .ok_or_else(|| PhotoSortError::malformed(current, "not a numbered variant of the candidate"))?;

    let next = n
        .checked_add(1)
        .ok_or_else(|| PhotoSortError::malformed(current, "collision counter overflow"))?;
    Ok(numbered(base, next, ext))
}

fn numbered(base: &str, n: u32, ext: &str) -> String {
    format!("{base}_{n}.{ext}")
}
