//! Flat listing of the source directory.
//! - Top-level entries only (no recursion).
//! - Symlinks are not followed; a link is listed as itself, never as a directory.
//! - Unreadable modification times fall back to the Unix epoch.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::errors::DateSortError;

/// One entry of the source listing.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub name: OsString,
    pub is_directory: bool,
    pub modified_at: SystemTime,
    pub permissions: fs::Permissions,
}

impl FileRecord {
    /// Build a record from already-fetched (non-following) metadata.
    pub fn from_metadata(name: OsString, meta: &fs::Metadata) -> Self {
        Self {
            name,
            is_directory: meta.is_dir(),
            modified_at: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            permissions: meta.permissions(),
        }
    }
}

/// List the immediate children of `dir`.
pub fn list_source(dir: &Path) -> Result<Vec<FileRecord>, DateSortError> {
    let mut records = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| DateSortError::ListingFailed {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        let meta = entry.metadata().map_err(|e| DateSortError::ListingFailed {
            path: entry.path().to_path_buf(),
            source: e.into(),
        })?;
        let record = FileRecord::from_metadata(entry.file_name().to_os_string(), &meta);
        trace!(name = ?record.name, is_dir = record.is_directory, "listed");
        records.push(record);
    }

    debug!(dir = %dir.display(), entries = records.len(), "source listed");
    Ok(records)
}
