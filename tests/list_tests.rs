//! Integration tests for list and search

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{diaro_cmd, init_diary, init_file_only_diary};

fn write(temp: &TempDir, date: &str, message: &str) {
    diaro_cmd()
        .current_dir(temp.path())
        .args(["write", date, "-m", message])
        .assert()
        .success();
}

#[test]
fn test_list_no_entries() {
    let temp = TempDir::new().unwrap();
    init_diary(&temp);

    diaro_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_sorted_newest_first() {
    let temp = TempDir::new().unwrap();
    init_file_only_diary(&temp);
    write(&temp, "2025-01-15", "a");
    write(&temp, "2025-01-20", "b");
    write(&temp, "2025-01-10", "c");

    let output = diaro_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "File entries (3):");
    assert!(lines[1].contains("2025-01-20"));
    assert!(lines[2].contains("2025-01-15"));
    assert!(lines[3].contains("2025-01-10"));
}

#[test]
fn test_list_surfaces_file_only_entry_in_dual_mode() {
    let temp = TempDir::new().unwrap();
    init_diary(&temp);
    write(&temp, "2024-01-15", "in both");
    fs::write(
        temp.path().join("diaries/diary_2024-02-01.txt"),
        "only on disk\n",
    )
    .unwrap();

    diaro_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database entries (1):"))
        .stdout(predicate::str::contains("File entries (2):"))
        .stdout(predicate::str::contains("diary_2024-02-01.txt"));
}

#[test]
fn test_search_in_file_only_diary() {
    let temp = TempDir::new().unwrap();
    init_file_only_diary(&temp);
    write(&temp, "2024-01-15", "Had a good day");
    write(&temp, "2024-01-16", "Rain all day");

    diaro_cmd()
        .current_dir(temp.path())
        .args(["search", "GOOD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File matches (1):"))
        .stdout(predicate::str::contains("2024-01-15"))
        .stdout(predicate::str::contains("2024-01-16").not())
        .stdout(predicate::str::contains("Database").not());
}

#[test]
fn test_search_reports_each_backend() {
    let temp = TempDir::new().unwrap();
    init_diary(&temp);
    write(&temp, "2024-01-15", "Had a good day");

    diaro_cmd()
        .current_dir(temp.path())
        .args(["search", "good"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database matches (1):"))
        .stdout(predicate::str::contains("File matches (1):"));
}

#[test]
fn test_search_no_matches() {
    let temp = TempDir::new().unwrap();
    init_diary(&temp);
    write(&temp, "2024-01-15", "Had a good day");

    diaro_cmd()
        .current_dir(temp.path())
        .args(["search", "snow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries contain 'snow'"));
}

#[test]
fn test_search_empty_term_fails() {
    let temp = TempDir::new().unwrap();
    init_diary(&temp);

    diaro_cmd()
        .current_dir(temp.path())
        .args(["search", " "])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("search term cannot be empty"));
}
