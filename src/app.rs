//! Application orchestrator.
//! Builds the config from CLI flags, initializes logging, runs the sort, and maps any
//! failure to a diagnostic and an exit code in one place.

use std::process::ExitCode;
use tracing::{debug, error, info};

use datesort::cli::Args;
use datesort::output::{self as out, ConsoleProgress};
use datesort::{DateSortError, sort_directory};

use crate::logging::init_tracing;

/// Exit code for failures that are not a `DateSortError` (e.g. logging setup).
const EXIT_OTHER: u8 = 1;

/// Run the CLI application.
pub fn run(args: Args) -> ExitCode {
    let cfg = args.to_config();

    // Keep the guard alive for the whole run so the file appender flushes on drop.
    let _guard = match init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json) {
        Ok(g) => g,
        Err(e) => {
            out::print_error(&format!("Failed to initialize logging: {e}"));
            return ExitCode::from(EXIT_OTHER);
        }
    };

    if let Some(raw) = args.log_level.as_deref()
        && args.effective_log_level().is_none()
    {
        out::print_warn(&format!("Unknown log level '{raw}'; using '{}'", cfg.log_level));
    }

    debug!("Starting datesort: {:?}", args);

    match sort_directory(&cfg, &mut ConsoleProgress) {
        Ok(summary) => {
            // stdout is reserved for the progress report.
            if cfg.dry_run {
                info!(
                    files = summary.moved(),
                    buckets = summary.buckets,
                    "Dry-run: nothing was moved"
                );
            } else if summary.moved() == 0 {
                info!("Nothing to sort");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            ExitCode::from(e.code())
        }
    }
}

/// Log the failure with structured fields and print a one-line diagnostic.
fn report_failure(e: &DateSortError) {
    let code = e.code();
    let kind = e.kind();
    match e {
        DateSortError::CollisionExhausted { dir, name, attempts } => {
            error!(code, kind, dir = %dir.display(), name = ?name, attempts, "Sort aborted")
        }
        DateSortError::Transfer { op, src, dest, .. } => {
            error!(code, kind, op, src = %src.display(), dest = %dest.display(), "Sort aborted")
        }
        _ => error!(code, kind, path = %e.path().display(), error = %e, "Sort aborted"),
    }
    out::print_error(&e.to_string());
}
