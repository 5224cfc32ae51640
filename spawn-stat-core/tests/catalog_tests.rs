#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for resource directory scanning.

use std::fs;
use std::path::Path;

use spawn_stat_core::scan_catalog;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").expect("failed to create file");
}

#[test]
fn missing_dir_yields_empty_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(scan_catalog(&tmp.path().join("resource")).is_empty());
}

#[test]
fn pairs_each_spot_with_its_map() {
    let tmp = tempfile::tempdir().unwrap();
    for name in ["001.png", "001a.png", "001b.png", "002.png", "002a.png"] {
        touch(tmp.path(), name);
    }

    let catalog = scan_catalog(tmp.path());
    let labels: Vec<_> = catalog.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["001a", "001b", "002a"]);
    assert_eq!(catalog[2].map_path, tmp.path().join("002.png"));
    assert_eq!(catalog[1].spot_path, tmp.path().join("001b.png"));
}

#[test]
fn stops_at_first_gap() {
    let tmp = tempfile::tempdir().unwrap();
    // 001c has no 001b, 003 has no 002
    for name in ["001.png", "001a.png", "001c.png", "003.png", "003a.png"] {
        touch(tmp.path(), name);
    }

    let labels: Vec<_> = scan_catalog(tmp.path())
        .into_iter()
        .map(|e| e.label)
        .collect();
    assert_eq!(labels, vec!["001a"]);
}

#[test]
fn map_without_spots_contributes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    for name in ["001.png", "002.png", "002a.png"] {
        touch(tmp.path(), name);
    }
    let labels: Vec<_> = scan_catalog(tmp.path())
        .into_iter()
        .map(|e| e.label)
        .collect();
    assert_eq!(labels, vec!["002a"]);
}
