//! Collision-free destination names.
//!
//! Candidates are tried in order: `name`, `1_name`, `2_name`, ... The first one with no
//! filesystem entry (a dangling symlink counts as an entry) wins. The search is capped at
//! `MAX_NAME_ATTEMPTS` candidates including the bare name.
//!
//! Notes:
//! - Check-then-act: another process may create the chosen name before we use it.
//!   Concurrent runs against the same destination are not supported.
//! - Names are handled as OsString so non-UTF8 names survive.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::errors::DateSortError;

/// Total number of candidates tried for one file (bare name + `1_`..`99_`).
pub const MAX_NAME_ATTEMPTS: usize = 100;

/// Name for the given attempt: 0 is the bare name, n > 0 is `n_<name>`.
pub fn candidate_name(name: &OsStr, attempt: usize) -> OsString {
    if attempt == 0 {
        return name.to_os_string();
    }
    let mut prefixed = OsString::from(format!("{attempt}_"));
    prefixed.push(name);
    prefixed
}

/// Pick the first free candidate for `name` inside `dir`.
pub fn resolve_destination(dir: &Path, name: &OsStr) -> Result<PathBuf, DateSortError> {
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let candidate = dir.join(candidate_name(name, attempt));
        if !entry_exists(&candidate).map_err(|source| DateSortError::Transfer {
            op: "inspect destination",
            src: dir.join(name),
            dest: candidate.clone(),
            source,
        })? {
            return Ok(candidate);
        }
        trace!(candidate = %candidate.display(), attempt, "destination taken");
    }

    Err(DateSortError::CollisionExhausted {
        dir: dir.to_path_buf(),
        name: name.to_os_string(),
        attempts: MAX_NAME_ATTEMPTS,
    })
}

/// True if anything (file, directory, symlink, even dangling) sits at `path`.
fn entry_exists(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
