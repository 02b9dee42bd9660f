//! Streaming copy with durability.
//!
//! - The destination is created with `create_new` so an entry that appeared after the
//!   collision check is never clobbered.
//! - Buffered I/O with large (1 MiB) buffers to reduce syscall count.
//! - The destination is flushed and `sync_all`ed before returning.
//!
//! Snapshot semantics: the source is read once from start to EOF. Callers compare the
//! returned byte count with the length they observed beforehand.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024;

/// Open `src` for reading.
pub(super) fn open_source(src: &Path) -> io::Result<File> {
    File::open(src)
}

/// Create `dst` exclusively for writing.
pub(super) fn create_destination(dst: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(dst)
}

/// Copy every byte of `src` into `dst`, then flush and fsync `dst`.
/// Returns the number of bytes written.
pub(super) fn copy_and_sync(src: File, dst: File) -> io::Result<u64> {
    let mut reader = BufReader::with_capacity(BUF_SIZE, src);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn copy(src: &Path, dst: &Path) -> io::Result<u64> {
        copy_and_sync(open_source(src)?, create_destination(dst)?)
    }

    #[test]
    fn copy_small_file_ok() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("src.txt");
        let dst_path = dir.path().join("dst.txt");
        let data = b"hello world";
        fs::write(&src_path, data).unwrap();

        let n = copy(&src_path, &dst_path).unwrap();
        assert_eq!(n, data.len() as u64);
        assert_eq!(fs::read(&dst_path).unwrap(), data);
    }

    #[test]
    fn copy_zero_length_ok() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("empty");
        let dst_path = dir.path().join("out");
        File::create(&src_path).unwrap();

        assert_eq!(copy(&src_path, &dst_path).unwrap(), 0);
        assert_eq!(fs::metadata(&dst_path).unwrap().len(), 0);
    }

    #[test]
    fn refuses_existing_destination() {
        let dir = tempdir().unwrap();
        let dst_path = dir.path().join("dst");
        fs::write(&dst_path, b"keep me").unwrap();

        let err = create_destination(&dst_path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&dst_path).unwrap(), b"keep me");
    }

    #[test]
    fn large_file_crosses_buffer_boundaries() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("big.bin");
        let dst = dir.path().join("big.out");

        let size = 2 * BUF_SIZE + 123;
        let data: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
        fs::write(&src, &data).unwrap();

        assert_eq!(copy(&src, &dst).unwrap() as usize, size);
        assert_eq!(fs::read(&dst).unwrap(), data);
    }
}
