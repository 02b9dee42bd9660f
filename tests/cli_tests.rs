use clap::Parser;
use datesort::cli::Args;
use datesort::config::types::{Config, LogLevel};
use serial_test::serial;
use std::path::{Path, PathBuf};

#[test]
fn defaults_sort_current_directory_in_place() {
    let args = Args::parse_from(["datesort"]);
    assert_eq!(args.from, PathBuf::from("."));
    assert!(args.to.is_none());

    let cfg = args.to_config();
    assert_eq!(cfg.effective_dest_base(), Path::new("."));
    assert!(!cfg.dry_run);
}

#[test]
fn to_defaults_to_from() {
    let args = Args::parse_from(["datesort", "--from", "/data/inbox"]);
    let cfg = args.to_config();
    assert_eq!(cfg.source, PathBuf::from("/data/inbox"));
    assert_eq!(cfg.effective_dest_base(), Path::new("/data/inbox"));
}

#[test]
fn explicit_to_wins() {
    let args = Args::parse_from(["datesort", "--from", "src", "--to", "out"]);
    let cfg = args.to_config();
    assert_eq!(cfg.source, PathBuf::from("src"));
    assert_eq!(cfg.effective_dest_base(), Path::new("out"));
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["datesort", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["datesort", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["datesort", "--log-level", "shouty"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "datesort",
        "--from",
        "/in",
        "--to",
        "/out",
        "--log-level",
        "quiet",
        "--log-file",
        "/tmp/datesort.log",
        "--dry-run",
        "--json",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.source, PathBuf::from("/in"));
    assert_eq!(cfg.dest_base, Some(PathBuf::from("/out")));
    assert_eq!(cfg.log_level, LogLevel::Quiet);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/datesort.log")));
    assert!(cfg.dry_run);
    assert!(cfg.json);
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Args::try_parse_from(["datesort", "--recursive"]).is_err());
}

#[test]
#[serial]
fn log_level_from_environment() {
    // SAFETY: serialized with other env-mutating tests.
    unsafe { std::env::set_var("DATESORT_LOG_LEVEL", "debug") };
    let args = Args::parse_from(["datesort"]);
    unsafe { std::env::remove_var("DATESORT_LOG_LEVEL") };
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));
}

#[test]
#[serial]
fn flag_beats_environment() {
    unsafe { std::env::set_var("DATESORT_LOG_LEVEL", "debug") };
    let args = Args::parse_from(["datesort", "--log-level", "quiet"]);
    unsafe { std::env::remove_var("DATESORT_LOG_LEVEL") };
    assert_eq!(args.effective_log_level(), Some(LogLevel::Quiet));
}
