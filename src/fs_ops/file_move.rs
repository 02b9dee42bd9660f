//! Single-file move.
//! Attempts an atomic rename; on any rename failure (cross-filesystem or otherwise), falls
//! back to copy + fsync + verify + remove source.

use std::path::Path;
use tracing::{debug, warn};

use crate::errors::DateSortError;

use super::atomic::try_atomic_move;
use super::copy::copy_then_remove;
use super::helpers::{io_hint, is_cross_device};

/// How a file reached its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMethod {
    /// Same-volume rename; metadata preserved by the filesystem.
    Renamed,
    /// Byte copy followed by removal of the source.
    Copied { bytes: u64 },
}

/// Move `src` to `dest`. `dest` must be a free path chosen by `resolve_destination`.
pub fn move_file(src: &Path, dest: &Path) -> Result<MoveMethod, DateSortError> {
    match try_atomic_move(src, dest) {
        Ok(()) => {
            debug!(src = %src.display(), dest = %dest.display(), "renamed atomically");
            Ok(MoveMethod::Renamed)
        }
        Err(e) => {
            let hint = if is_cross_device(&e) {
                "cross-filesystem; will copy instead"
            } else {
                "falling back to copy"
            };
            warn!(
                src = %src.display(),
                error = %e,
                detail = %io_hint(&e),
                hint,
                "Atomic rename failed, using copy"
            );
            let bytes = copy_then_remove(src, dest)?;
            Ok(MoveMethod::Copied { bytes })
        }
    }
}
