//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --to defaults to the value of --from.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::config::SOURCE_DEFAULT;

/// Sort the files of a directory into <to>/<year>/<year>-<month>-<day>/ by modification date.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sort files into a year/day directory tree by modification date"
)]
pub struct Args {
    /// Directory whose top-level files are sorted (subdirectories are skipped).
    #[arg(long, value_name = "DIR", default_value = SOURCE_DEFAULT, value_hint = ValueHint::DirPath)]
    pub from: PathBuf,

    /// Base directory for the date tree (defaults to --from).
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub to: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(
        long,
        env = "DATESORT_LOG_LEVEL",
        help = "Set log level: quiet, normal, info, debug"
    )]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, env = "DATESORT_LOG_FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Dry-run: print where files would go but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be done, but do not create directories or move files"
    )]
    pub dry_run: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        cfg.source = self.from.clone();
        if let Some(to) = &self.to {
            cfg.dest_base = Some(to.clone());
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.json {
            cfg.json = true;
        }
    }

    /// Build a Config from defaults plus these arguments.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::default();
        self.apply_overrides(&mut cfg);
        cfg
    }
}

pub fn parse() -> Args {
    Args::parse()
}
