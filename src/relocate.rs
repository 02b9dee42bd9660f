//! Relocation of bucketed files into the date tree.
//!
//! For every bucket (in date order):
//! - create `<dest_base>/<Y>/<Y>-<MM>-<DD>` with the source-root permissions,
//! - for every file, pick a free name (`name`, `1_name`, ...) and move it there.
//!
//! The first failure aborts the run; files already moved stay where they are, so the run
//! can simply be repeated.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::bucket::{BucketKey, BucketPlan};
use crate::config::RunContext;
use crate::errors::DateSortError;
use crate::fs_ops::{MoveMethod, move_file, resolve_destination};
use crate::platform::create_dir_all_with_permissions;

/// Receives progress while a plan is relocated.
pub trait Progress {
    /// A bucket is about to be processed.
    fn bucket(&mut self, key: &BucketKey, files: usize);
    /// A file was placed (or, in dry-run, would be placed) at `dest`.
    fn file(&mut self, dest: &Path);
}

/// One relocated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub src: PathBuf,
    pub dest: PathBuf,
    /// `None` in dry-run mode.
    pub method: Option<MoveMethod>,
}

/// Result of a completed run.
#[derive(Debug, Default)]
pub struct RelocationSummary {
    pub buckets: usize,
    pub placements: Vec<Placement>,
}

impl RelocationSummary {
    pub fn moved(&self) -> usize {
        self.placements.len()
    }

    pub fn copied(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| matches!(p.method, Some(MoveMethod::Copied { .. })))
            .count()
    }
}

/// Relocate every file of `plan` below `ctx.dest_base`.
pub fn relocate(
    ctx: &RunContext,
    plan: &BucketPlan,
    progress: &mut dyn Progress,
) -> Result<RelocationSummary, DateSortError> {
    let mut summary = RelocationSummary::default();

    for (key, files) in plan.iter() {
        progress.bucket(key, files.len());
        let target_dir = ctx.dest_base.join(key.relative_dir());

        if ctx.dry_run {
            debug!(dir = %target_dir.display(), "dry-run: would create directory");
        } else {
            create_dir_all_with_permissions(&target_dir, &ctx.dir_permissions).map_err(
                |source| DateSortError::DestinationCreate {
                    path: target_dir.clone(),
                    source,
                },
            )?;
        }

        for record in files {
            let src = ctx.source.join(&record.name);
            let dest = resolve_destination(&target_dir, &record.name)?;

            let method = if ctx.dry_run {
                debug!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
                None
            } else {
                Some(move_file(&src, &dest)?)
            };
            debug!(bucket = %key, src = %src.display(), dest = %dest.display(), ?method, "placed");

            progress.file(&dest);
            summary.placements.push(Placement { src, dest, method });
        }
        summary.buckets += 1;
    }

    info!(
        buckets = summary.buckets,
        files = summary.moved(),
        copied = summary.copied(),
        dry_run = ctx.dry_run,
        "Relocation finished"
    );
    Ok(summary)
}
