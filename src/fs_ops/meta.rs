//! Metadata carry-over for the copy fallback.
//! A rename keeps timestamps and mode; a byte copy does not, so copy them over from the
//! source metadata captured before the copy. Best-effort: failures are logged, not fatal.

use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;
use tracing::debug;

pub(super) fn carry_over_metadata(src_meta: &fs::Metadata, dest: &Path) {
    let mtime = FileTime::from_last_modification_time(src_meta);
    let atime = FileTime::from_last_access_time(src_meta);
    if let Err(e) = set_file_times(dest, atime, mtime) {
        debug!(dest = %dest.display(), error = %e, "could not carry over timestamps");
    }

    if let Err(e) = fs::set_permissions(dest, src_meta.permissions()) {
        debug!(dest = %dest.display(), error = %e, "could not carry over permissions");
    }
}
