use assert_fs::TempDir;
use assert_fs::prelude::*;
use doc_archive::ArchiveError;
use doc_archive::config::{Config, validate_and_normalize};

#[test]
fn root_with_inbox_and_documents_is_valid() {
    let td = TempDir::new().unwrap();
    td.child("Inbox").create_dir_all().unwrap();
    td.child("Documents").create_dir_all().unwrap();
    let mut cfg = Config::new(td.path());
    validate_and_normalize(&mut cfg).expect("valid layout");
    assert_eq!(cfg.root, dunce::canonicalize(td.path()).unwrap());
}

#[test]
fn missing_inbox_and_documents_are_fine() {
    let td = TempDir::new().unwrap();
    Config::new(td.path()).validate().expect("empty root is valid");
    assert!(!td.path().join("Documents").exists(), "validation must not create directories");
}

#[test]
fn missing_root_is_rejected_with_typed_error() {
    let td = TempDir::new().unwrap();
    let err = Config::new(td.path().join("missing")).validate().unwrap_err();
    let typed = err.downcast_ref::<ArchiveError>().expect("typed error");
    assert!(matches!(typed, ArchiveError::RootInvalid(_)));
    assert_eq!(typed.code(), 20);
}

#[test]
fn documents_must_be_a_directory() {
    let td = TempDir::new().unwrap();
    td.child("Documents").write_str("oops").unwrap();
    let err = Config::new(td.path()).validate().unwrap_err();
    assert!(err.to_string().contains("documents exists but isn't a directory"));
}

#[test]
fn inbox_must_be_a_directory() {
    let td = TempDir::new().unwrap();
    td.child("Inbox").write_str("oops").unwrap();
    assert!(Config::new(td.path()).validate().is_err());
}
