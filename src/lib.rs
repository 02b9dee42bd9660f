//! Core library for `datesort`.
//!
//! Sorts the top-level files of a directory into `<base>/<Y>/<Y>-<MM>-<DD>/` by
//! modification date. A run is: validate config, list the source, group into buckets,
//! relocate bucket by bucket. Every failure is returned as a `DateSortError` and aborts
//! the run; re-running picks up whatever is still left in the source.

pub mod bucket;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;
pub mod relocate;

pub use bucket::{BucketKey, BucketPlan};
pub use config::{Config, LogLevel, RunContext, path_has_symlink_ancestor};
pub use errors::DateSortError;
pub use fs_ops::{FileRecord, MoveMethod};
pub use relocate::{Placement, Progress, RelocationSummary, relocate};

use tracing::debug;

/// Run a full sort for `config`, reporting progress as buckets and files are handled.
pub fn sort_directory(
    config: &Config,
    progress: &mut dyn Progress,
) -> Result<RelocationSummary, DateSortError> {
    let ctx = config.validate()?;
    let records = fs_ops::list_source(&ctx.source)?;
    let plan = BucketPlan::from_records(records);
    debug!(
        buckets = plan.bucket_count(),
        files = plan.file_count(),
        "planned"
    );
    relocate(&ctx, &plan, progress)
}
