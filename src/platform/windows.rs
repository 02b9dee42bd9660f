//! Non-Unix implementations of platform helpers.
//!
//! Notes:
//! - No POSIX mode semantics; directories are created with default permissions.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Open log file for appending (best-effort; no symlink defense available via std here).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Create `path` and missing parents. Only the read-only flag of `_perms` is meaningful
/// on this platform and it is not applied to directories.
pub fn create_dir_all_with_permissions(path: &Path, _perms: &fs::Permissions) -> io::Result<()> {
    fs::create_dir_all(path)
}
