//! Copy fallback used when rename is not possible (e.g. across volumes).
//!
//! Steps: stat source, open source, exclusively create destination, stream + fsync,
//! verify the byte count against the source length, carry over times and mode, fsync the
//! destination directory, remove the source.
//!
//! A partially written destination is removed before the error is returned; the source is
//! only removed once the copy is complete and durable.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::errors::DateSortError;

use super::io_copy::{copy_and_sync, create_destination, open_source};
use super::meta::carry_over_metadata;
use super::util::fsync_dir;

/// Copy `src` to the free path `dest`, then remove `src`. Returns bytes copied.
pub fn copy_then_remove(src: &Path, dest: &Path) -> Result<u64, DateSortError> {
    let transfer = move |op: &'static str| {
        move |source: io::Error| DateSortError::Transfer {
            op,
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            source,
        }
    };

    let src_meta = fs::metadata(src).map_err(transfer("stat source"))?;
    let reader = open_source(src).map_err(transfer("open source"))?;
    let writer = create_destination(dest).map_err(transfer("create destination"))?;

    let bytes = match copy_and_sync(reader, writer) {
        Ok(n) => n,
        Err(e) => {
            discard_partial(dest);
            return Err(transfer("copy")(e));
        }
    };

    if bytes != src_meta.len() {
        discard_partial(dest);
        return Err(transfer("verify copy")(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("copied {bytes} of {} bytes", src_meta.len()),
        )));
    }

    carry_over_metadata(&src_meta, dest);
    if let Some(parent) = dest.parent() {
        let _ = fsync_dir(parent);
    }

    fs::remove_file(src).map_err(transfer("remove source"))?;
    debug!(src = %src.display(), dest = %dest.display(), bytes, "copied and removed source");
    Ok(bytes)
}

fn discard_partial(dest: &Path) {
    if let Err(e) = fs::remove_file(dest) {
        debug!(dest = %dest.display(), error = %e, "could not remove partial copy");
    }
}
