//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::SOURCE_DEFAULT;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one sorting run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose top-level files are sorted
    pub source: PathBuf,
    /// Base of the date tree; `None` means "same as source"
    pub dest_base: Option<PathBuf>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, print the plan but do not modify the filesystem
    pub dry_run: bool,
    /// Emit logs as JSON
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_DEFAULT),
            dest_base: None,
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
            json: false,
        }
    }
}

impl Config {
    /// Construct a Config with explicit directories; other fields use defaults.
    pub fn new(source: impl Into<PathBuf>, dest_base: Option<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest_base,
            ..Default::default()
        }
    }

    /// Effective destination base: `dest_base` when set, otherwise the source itself.
    pub fn effective_dest_base(&self) -> &Path {
        self.dest_base.as_deref().unwrap_or(&self.source)
    }
}
