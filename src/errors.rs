//! Typed error definitions for datesort.
//! Every failure is fatal for the run; the binary maps each kind to an exit code.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::io_hint;

#[derive(Debug, Error)]
pub enum DateSortError {
    #[error("Source directory unavailable: {path}: {source}{}", io_hint(.source))]
    SourceUnavailable { path: PathBuf, source: io::Error },

    #[error("Cannot list source directory {path}: {source}{}", io_hint(.source))]
    ListingFailed { path: PathBuf, source: io::Error },

    #[error("Destination base exists but is not a directory: {path}")]
    DestinationInvalid { path: PathBuf },

    #[error("Cannot create directory {path}: {source}{}", io_hint(.source))]
    DestinationCreate { path: PathBuf, source: io::Error },

    #[error(
        "No free name for {} in {dir} after {attempts} attempts",
        .name.to_string_lossy()
    )]
    CollisionExhausted {
        dir: PathBuf,
        name: OsString,
        attempts: usize,
    },

    #[error("Cannot {op} moving {src} -> {dest}: {source}{}", io_hint(.source))]
    Transfer {
        op: &'static str,
        src: PathBuf,
        dest: PathBuf,
        source: io::Error,
    },
}

impl DateSortError {
    /// Process exit code for this failure.
    pub fn code(&self) -> u8 {
        match self {
            DateSortError::SourceUnavailable { .. } | DateSortError::ListingFailed { .. } => 3,
            DateSortError::DestinationInvalid { .. } | DateSortError::DestinationCreate { .. } => 4,
            DateSortError::CollisionExhausted { .. } => 5,
            DateSortError::Transfer { .. } => 6,
        }
    }

    /// Short machine-friendly name used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DateSortError::SourceUnavailable { .. } => "source_unavailable",
            DateSortError::ListingFailed { .. } => "listing_failed",
            DateSortError::DestinationInvalid { .. } => "destination_invalid",
            DateSortError::DestinationCreate { .. } => "destination_create",
            DateSortError::CollisionExhausted { .. } => "collision_exhausted",
            DateSortError::Transfer { .. } => "transfer_failed",
        }
    }

    /// The path most relevant to the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DateSortError::SourceUnavailable { path, .. }
            | DateSortError::ListingFailed { path, .. }
            | DateSortError::DestinationInvalid { path }
            | DateSortError::DestinationCreate { path, .. } => path,
            DateSortError::CollisionExhausted { dir, .. } => dir,
            DateSortError::Transfer { src, .. } => src,
        }
    }
}
