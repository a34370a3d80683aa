//! Batch behavior against seeded destinations (no files are touched).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use doc_archive::{ActionKind, Config, DocumentArchiver, Verbosity};

const INBOX: [&str; 4] = [
    "TestDocument_20250624.pdf",
    "TestDocument_20240624_001.pdf",
    "TestDocument_20250624b.pdf",
    "20250624_TestDocument.pdf",
];

fn dry_cfg() -> Config {
    let mut cfg = Config::new("/cloud");
    cfg.verbosity = Verbosity::Silent;
    cfg.dry_run = true;
    cfg
}

fn docs(rel: &str) -> PathBuf {
    Path::new("/cloud/Documents").join(rel)
}

#[test]
fn destinations_with_empty_archive() {
    let mut archiver = DocumentArchiver::with_existence(dry_cfg(), HashSet::<PathBuf>::new());
    let lines = archiver.archive_files(INBOX);
    assert_eq!(
        lines,
        vec![
            r#"Move "TestDocument_20250624.pdf" to ".../Documents/2025/TestDocument_20250624.pdf""#,
            r#"Move "TestDocument_20240624_001.pdf" to ".../Documents/2024/TestDocument_20240624b.pdf""#,
            r#"Move "TestDocument_20250624b.pdf" to ".../Documents/2025/TestDocument_20250624b.pdf""#,
            r#"Move "20250624_TestDocument.pdf" to ".../Documents/2025/TestDocument_20250624.pdf""#,
        ]
    );
    assert_eq!(
        archiver.report().lines(),
        vec!["Moved 1 file to 2024", "Moved 3 files to 2025"]
    );
}

#[test]
fn seeded_collisions_resolve_to_letter_c() {
    let existing: HashSet<PathBuf> = [
        docs("2025/TestDocument_20250624.pdf"),
        docs("2025/TestDocument_20250624b.pdf"),
        docs("2024/TestDocument_20240624b.pdf"),
    ]
    .into_iter()
    .collect();
    let mut archiver = DocumentArchiver::with_existence(dry_cfg(), existing);
    let lines = archiver.archive_files(INBOX);
    assert_eq!(
        lines,
        vec![
            r#"Move "TestDocument_20250624.pdf" to ".../Documents/2025/TestDocument_20250624c.pdf""#,
            r#"Move "TestDocument_20240624_001.pdf" to ".../Documents/2024/TestDocument_20240624c.pdf""#,
            r#"Move "TestDocument_20250624b.pdf" to ".../Documents/2025/TestDocument_20250624c.pdf""#,
            r#"Move "20250624_TestDocument.pdf" to ".../Documents/2025/TestDocument_20250624c.pdf""#,
        ]
    );
}

#[test]
fn undated_names_are_skipped_not_fatal() {
    let mut archiver = DocumentArchiver::with_existence(dry_cfg(), HashSet::<PathBuf>::new());
    let lines = archiver.archive_files(["scan.pdf", "", "README", "Doc_20250101.pdf"]);
    assert_eq!(lines[0], r#"Skipping "scan.pdf", don't know where to store it"#);
    assert_eq!(lines[1], r#"Skipping "", don't know where to store it"#);
    assert_eq!(lines[2], r#"Skipping "README", don't know where to store it"#);
    assert!(lines[3].starts_with("Move"));
    assert_eq!(archiver.report().total(), 1);
}

#[test]
fn exhausted_collisions_are_skipped() {
    let mut archiver = DocumentArchiver::with_existence(dry_cfg(), |_: &Path| true);
    let lines = archiver.archive_files(["Doc_20250101.pdf"]);
    assert_eq!(lines, vec![r#"Skipping "Doc_20250101.pdf", already exists on destination"#]);
    assert_eq!(archiver.actions()[0].kind, ActionKind::AlreadyExists);
    assert!(archiver.report().is_empty());
}

#[test]
fn verbosity_does_not_change_the_action_log() {
    let mut lines_by_mode = Vec::new();
    for verbosity in [Verbosity::Silent, Verbosity::WhenNotMoved, Verbosity::All] {
        let mut cfg = dry_cfg();
        cfg.verbosity = verbosity;
        let mut archiver = DocumentArchiver::with_existence(cfg, HashSet::<PathBuf>::new());
        lines_by_mode.push(archiver.archive_files(INBOX.iter().chain(&["junk.txt"])));
    }
    assert_eq!(lines_by_mode[0], lines_by_mode[1]);
    assert_eq!(lines_by_mode[1], lines_by_mode[2]);
    assert_eq!(lines_by_mode[0].len(), 5);
}

#[test]
fn max_stops_after_n_moves() {
    let mut cfg = dry_cfg();
    cfg.max_files = Some(2);
    let mut archiver = DocumentArchiver::with_existence(cfg, HashSet::<PathBuf>::new());
    let lines = archiver.archive_files(INBOX);
    assert_eq!(lines.len(), 2);
    assert_eq!(archiver.report().lines(), vec!["Moved 1 file to 2024", "Moved 1 file to 2025"]);
}
