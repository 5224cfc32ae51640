#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `FileStorage` and a file-backed `RouteSession`.

use std::fs;
use std::sync::Arc;

use spawn_stat_core::adapters::FileStorage;
use spawn_stat_core::traits::{RouteStore, SaveStore};
use spawn_stat_core::types::{DropKind, StorageConfig};
use spawn_stat_core::{CoreError, EntryStore, RouteSession};

// ===== Helpers =====

fn create_test_storage() -> (Arc<FileStorage>, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let config = StorageConfig::default().resolved_in(&tmp.path().join("data"));
    (Arc::new(FileStorage::new(config)), tmp)
}

fn create_session(storage: &Arc<FileStorage>, len: usize) -> RouteSession {
    RouteSession::new(EntryStore::with_len(len), storage.clone(), storage.clone())
}

// ===== FileStorage Tests =====

#[test]
fn missing_files_read_as_none() {
    let (storage, _tmp) = create_test_storage();
    assert_eq!(storage.read_route().unwrap(), None);
    assert_eq!(storage.read_save().unwrap(), None);
}

#[test]
fn write_creates_parent_dir_and_replaces_content() {
    let (storage, _tmp) = create_test_storage();
    storage.write_route("0 1 2 3").unwrap();
    storage.write_route("2").unwrap();
    assert_eq!(storage.read_route().unwrap().as_deref(), Some("2"));
    assert_eq!(
        fs::read_to_string(&storage.config().route_file).unwrap(),
        "2"
    );
}

#[test]
fn route_and_save_are_separate_files() {
    let (storage, _tmp) = create_test_storage();
    storage.write_route("1 0").unwrap();
    storage.write_save("[[1,0]]").unwrap();
    assert_eq!(storage.read_route().unwrap().as_deref(), Some("1 0"));
    assert_eq!(storage.read_save().unwrap().as_deref(), Some("[[1,0]]"));
}

#[test]
fn unreadable_path_is_storage_error() {
    let tmp = tempfile::tempdir().unwrap();
    // the path is a directory, not a file
    let storage = FileStorage::new(StorageConfig {
        route_file: tmp.path().to_path_buf(),
        save_file: tmp.path().join("save.json"),
    });
    assert!(matches!(
        storage.read_route(),
        Err(CoreError::StorageError(_))
    ));
}

// ===== RouteSession Tests =====

#[test]
fn confirmed_route_survives_restart() {
    let (storage, _tmp) = create_test_storage();

    let mut session = create_session(&storage, 5);
    session.begin_edit();
    for i in [3, 0, 4] {
        session.toggle(i, true).unwrap();
    }
    session.confirm_edit().unwrap();

    let mut restarted = create_session(&storage, 5);
    assert!(restarted.restore_route().unwrap());
    assert_eq!(restarted.editor().current_route(), &[3, 0, 4]);
}

#[test]
fn save_load_scenario() {
    let (storage, _tmp) = create_test_storage();

    let mut session = create_session(&storage, 3);
    session.begin_edit();
    session.toggle(2, true).unwrap();
    session.toggle(0, true).unwrap();
    session.confirm_edit().unwrap();
    session.classify(2, DropKind::SingleTwoStar).unwrap();
    session.save().unwrap();
    assert_eq!(
        fs::read_to_string(&storage.config().save_file).unwrap(),
        "[[2,2]]"
    );

    let mut fresh = create_session(&storage, 3);
    fresh.load().unwrap();
    assert_eq!(fresh.editor().current_route(), &[2]);
    assert_eq!(
        fresh.entries().classification(2).unwrap(),
        DropKind::SingleTwoStar
    );
    // Load rebuilds the route and rewrites the route file
    assert_eq!(storage.read_route().unwrap().as_deref(), Some("2"));
}

#[test]
fn hand_edited_save_with_bad_code_is_ignored() {
    let (storage, _tmp) = create_test_storage();
    storage.write_save("[[0,2],[1,3]]").unwrap();

    let mut session = create_session(&storage, 3);
    assert!(session.load().is_err());
    assert_eq!(session.entries().classified().count(), 0);
    assert_eq!(session.editor().current_route(), &[0, 1, 2]);
}
