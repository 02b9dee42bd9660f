//! Config validation.
//! Verifies the source directory is usable, checks the destination base, and samples the
//! source-root permissions used for every bucket directory created later.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::errors::DateSortError;

use super::types::Config;

/// Validated, ready-to-run view of a Config.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub source: PathBuf,
    pub dest_base: PathBuf,
    /// Permissions of the source root, applied to created directories.
    pub dir_permissions: fs::Permissions,
    pub dry_run: bool,
}

impl Config {
    /// Check the source exists, is a readable directory, and that the destination base
    /// (if present) is a directory. The destination base may be missing; it is created
    /// together with the first bucket directory.
    pub fn validate(&self) -> Result<RunContext, DateSortError> {
        let source = &self.source;
        let unavailable = |source_err: std::io::Error| DateSortError::SourceUnavailable {
            path: source.clone(),
            source: source_err,
        };

        let meta = fs::metadata(source).map_err(unavailable)?;
        if !meta.is_dir() {
            return Err(unavailable(std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                "not a directory",
            )));
        }
        fs::read_dir(source).map_err(unavailable)?;
        debug!("source readable: {}", source.display());

        let dest_base = self.effective_dest_base().to_path_buf();
        match fs::metadata(&dest_base) {
            Ok(m) if !m.is_dir() => {
                return Err(DateSortError::DestinationInvalid { path: dest_base });
            }
            Ok(_) => debug!("destination base exists: {}", dest_base.display()),
            Err(_) => debug!("destination base will be created: {}", dest_base.display()),
        }

        let src_real = dunce::canonicalize(source).unwrap_or_else(|_| source.clone());
        let dest_real = dunce::canonicalize(&dest_base).unwrap_or_else(|_| dest_base.clone());
        info!(
            source = %src_real.display(),
            dest = %dest_real.display(),
            in_place = src_real == dest_real,
            dry_run = self.dry_run,
            "Config validated"
        );

        Ok(RunContext {
            source: source.clone(),
            dest_base,
            dir_permissions: meta.permissions(),
            dry_run: self.dry_run,
        })
    }
}
