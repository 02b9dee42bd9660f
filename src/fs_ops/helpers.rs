//! I/O error hints.
//!
//! Turns a raw io::Error into a short, actionable suffix for user-facing messages.
//! Used from the Display impl of `DateSortError`, e.g.
//!   "Cannot create directory out/2023: Permission denied (os error 13) — permission denied; ..."

use std::io;

/// Platform-aware hint for an io::Error, prefixed with " — ". Empty when nothing useful applies.
pub fn io_hint(e: &io::Error) -> String {
    let hint = e.raw_os_error().and_then(os_code_hint).or_else(|| kind_hint(e.kind()));
    match (hint, e.raw_os_error()) {
        (Some(h), Some(code)) => format!(" — {h} [os code: {code}]"),
        (Some(h), None) => format!(" — {h}"),
        (None, _) => String::new(),
    }
}

#[cfg(unix)]
fn os_code_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions.",
        libc::EXDEV => "cross-filesystem; atomic rename not possible.",
        libc::ENOENT => "path not found; verify it exists.",
        libc::EEXIST => "already exists; another process may be writing into the destination.",
        libc::ENOTDIR => "a path component is not a directory.",
        libc::ENOSPC => "insufficient space on device.",
        libc::EROFS => "read-only filesystem; cannot write here.",
        libc::ENAMETOOLONG => "filename or path too long; shorten path segments.",
        libc::EMFILE => "process file descriptor limit reached; close files or raise limits.",
        _ => return None,
    };
    Some(hint)
}

#[cfg(windows)]
fn os_code_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        5 => "access denied; check permissions.",          // ERROR_ACCESS_DENIED
        17 => "not same device; cross-filesystem move.",   // ERROR_NOT_SAME_DEVICE
        32 => "sharing violation; file is in use.",        // ERROR_SHARING_VIOLATION
        2 | 3 => "path not found; verify it exists.",      // FILE/ PATH NOT FOUND
        80 => "already exists; another process may be writing into the destination.", // ERROR_FILE_EXISTS
        112 => "insufficient disk space.",                 // ERROR_DISK_FULL
        206 => "filename or path too long (MAX_PATH exceeded).", // ERROR_FILENAME_EXCED_RANGE
        _ => return None,
    };
    Some(hint)
}

#[cfg(not(any(unix, windows)))]
fn os_code_hint(_code: i32) -> Option<&'static str> {
    None
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions."),
        io::ErrorKind::NotFound => Some("path not found; verify it exists."),
        io::ErrorKind::AlreadyExists => Some("already exists; another process may be writing into the destination."),
        io::ErrorKind::UnexpectedEof => Some("source changed size while it was being copied."),
        _ => None,
    }
}

/// True when a rename failed because source and destination live on different volumes.
pub(crate) fn is_cross_device(e: &io::Error) -> bool {
    e.raw_os_error().is_some_and(is_cross_device_code)
}

#[cfg(unix)]
fn is_cross_device_code(code: i32) -> bool {
    code == libc::EXDEV
}

#[cfg(windows)]
fn is_cross_device_code(code: i32) -> bool {
    // ERROR_NOT_SAME_DEVICE
    code == 17
}

#[cfg(not(any(unix, windows)))]
fn is_cross_device_code(_code: i32) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notfound_kind_hint() {
        let hint = io_hint(&io::Error::from(io::ErrorKind::NotFound));
        assert!(hint.contains("path not found"), "hint was: {hint}");
        assert!(!hint.contains("os code"));
    }

    #[test]
    fn unrelated_kind_has_no_hint() {
        let hint = io_hint(&io::Error::other("boom"));
        assert!(hint.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn enospc_hint_includes_code() {
        let hint = io_hint(&io::Error::from_raw_os_error(libc::ENOSPC));
        assert!(hint.contains("insufficient space"), "hint was: {hint}");
        assert!(hint.contains("os code"));
    }

    #[cfg(unix)]
    #[test]
    fn exdev_is_cross_device() {
        let e = io::Error::from_raw_os_error(libc::EXDEV);
        assert!(is_cross_device(&e));
        assert!(io_hint(&e).contains("cross-filesystem"));
        assert!(!is_cross_device(&io::Error::from_raw_os_error(libc::EACCES)));
    }
}
