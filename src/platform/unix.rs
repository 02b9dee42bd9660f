//! Unix implementations of platform helpers.

use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io;
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};
use std::path::Path;

/// Open log file for appending; set 0600 only when creating a new file.
/// If the file already exists, we preserve its existing permissions to avoid
/// clobbering administrator adjustments (e.g. group-readable for log shipping).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600) // applies on create
        .open(path)?;
    if !existed {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}

/// mkdir -p with the mode bits of `perms` for every directory created.
/// Existing directories keep their mode; the process umask still applies.
pub fn create_dir_all_with_permissions(path: &Path, perms: &fs::Permissions) -> io::Result<()> {
    DirBuilder::new()
        .recursive(true)
        .mode(perms.mode() & 0o7777)
        .create(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn preserve_existing_log_file_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, b"hello").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        let _f = open_log_file_secure_append(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640, "existing permissions should be preserved");
    }

    #[test]
    fn new_log_file_gets_0600() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new_log.txt");
        let _f = open_log_file_secure_append(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "newly created log file should be 0600");
    }

    #[test]
    fn nested_dirs_take_requested_mode() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("2023").join("2023-03-05");
        // 0o700 is unaffected by any common umask.
        create_dir_all_with_permissions(&target, &fs::Permissions::from_mode(0o700)).unwrap();
        for p in [dir.path().join("2023"), target.clone()] {
            let mode = fs::metadata(&p).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o700, "{} has mode {:o}", p.display(), mode);
        }
    }

    #[test]
    fn existing_dir_is_ok() {
        let dir = tempdir().unwrap();
        let perms = fs::metadata(dir.path()).unwrap().permissions();
        create_dir_all_with_permissions(dir.path(), &perms).unwrap();
    }
}
