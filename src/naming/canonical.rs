//! Canonical `YYYYMMDD_HHMMSS.ext` names.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::Result;
use crate::timestamp::Timestamp;

use super::file_name::FileName;

// ASCII classes on purpose: `\d`/`\w` in `regex` are Unicode-aware.
static CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{8}_[0-9]{6}\.[A-Za-z0-9_]+$").expect("canonical name pattern is valid")
});

/// True when `name` already has the plain canonical shape (no `_N` suffix).
pub fn is_canonical(name: &str) -> bool {
    CANONICAL.is_match(name)
}

/// Build `date_time.ext` for `source`, keeping the extension after its last period.
pub fn canonical_name(ts: &Timestamp, source: &str) -> Result<String> {
    let ext = FileName::parse(source).require_extension()?;
    Ok(format!("{}_{}.{}", ts.date_code(), ts.time_code(), ext))
}
