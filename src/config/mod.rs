//! Config module.
//! Provides runtime configuration types, validation and path safety helpers.
//! Configuration comes only from CLI flags and environment; nothing is persisted.

pub mod paths;
pub mod types;
mod validate;

pub use paths::path_has_symlink_ancestor;
pub use types::{Config, LogLevel};
pub use validate::RunContext;

/// Source directory used when `--from` is not given.
pub const SOURCE_DEFAULT: &str = ".";
