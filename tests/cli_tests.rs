use clap::Parser;
use doc_archive::cli::Args;
use doc_archive::config::types::{Config, LogLevel, Verbosity};
use std::path::PathBuf;

#[test]
fn defaults_leave_config_untouched() {
    let args = Args::parse_from(["doc_archive"]);
    let mut cfg = Config::new("/cloud");
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.root, PathBuf::from("/cloud"));
    assert_eq!(cfg.verbosity, Verbosity::WhenNotMoved);
    assert!(!cfg.dry_run);
    assert_eq!(cfg.max_files, None);
    assert_eq!(cfg.log_level, LogLevel::Quiet);
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["doc_archive", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["doc_archive", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["doc_archive", "--log-level", "shouty"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "doc_archive",
        "--root",
        "/srv/cloud",
        "--verbosity",
        "all",
        "--dry-run",
        "--max",
        "7",
        "--log-file",
        "/tmp/doc_archive.log",
    ]);
    let mut cfg = Config::new("/cloud");
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.root, PathBuf::from("/srv/cloud"));
    assert_eq!(cfg.verbosity, Verbosity::All);
    assert!(cfg.dry_run);
    assert_eq!(cfg.max_files, Some(7));
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/doc_archive.log")));
}

#[test]
fn invalid_verbosity_is_a_parse_error() {
    let res = Args::try_parse_from(["doc_archive", "--verbosity", "loud"]);
    assert!(res.is_err());
}
