//! End-to-end copy behavior through the real binary

mod common;

use assert_cmd::Command;
use common::TestDir;
use predicates::prelude::*;

#[allow(deprecated)]
fn pkgcopy_cmd() -> Command {
    Command::cargo_bin("pkgcopy").unwrap()
}

#[test]
fn test_literal_source_explicit_dest() {
    let dir = TestDir::new();
    dir.write_file("source", "payload");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["copy", "source", "--to", "dest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied"));

    assert_eq!(dir.read_file("dest"), "payload");
    assert_eq!(dir.read_file("source"), "payload");
}

#[test]
fn test_glob_source_explicit_dest() {
    let dir = TestDir::new();
    dir.write_file("source", "payload");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["copy", "source*", "--to", "dest"])
        .assert()
        .success();

    assert_eq!(dir.read_file("dest"), "payload");
}

#[test]
fn test_glob_derives_dest_from_source_name() {
    let dir = TestDir::new();
    dir.write_file("source", "payload");
    dir.create_dir("fake_cache_dir");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["copy", "source*", "--cache-dir", "fake_cache_dir"])
        .assert()
        .success();

    assert_eq!(dir.read_file("fake_cache_dir/source"), "payload");
}

#[test]
fn test_cache_dir_from_environment() {
    let dir = TestDir::new();
    dir.write_file("source", "payload");
    let cache = dir.create_dir("cache");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .env("PKGCOPY_CACHE_DIR", &cache)
        .args(["copy", "source*"])
        .assert()
        .success();

    assert_eq!(dir.read_file("cache/source"), "payload");
}

#[test]
fn test_explicit_dest_wins_over_cache_dir() {
    let dir = TestDir::new();
    dir.write_file("source", "payload");
    dir.create_dir("cache");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["copy", "source*", "--to", "dest", "--cache-dir", "cache"])
        .assert()
        .success();

    assert_eq!(dir.read_file("dest"), "payload");
    assert!(!dir.file_exists("cache/source"));
}

#[test]
fn test_overwrites_existing_dest() {
    let dir = TestDir::new();
    dir.write_file("source", "new");
    dir.write_file("dest", "old");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["copy", "source", "--to", "dest"])
        .assert()
        .success();

    assert_eq!(dir.read_file("dest"), "new");
}

#[test]
fn test_multiple_matches_warns_and_picks_first_sorted() {
    let dir = TestDir::new();
    dir.write_file("source-a", "first");
    dir.write_file("source-b", "second");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["copy", "source*", "--to", "dest"])
        .assert()
        .success()
        .stderr(predicate::str::contains("multiple packages match"))
        .stderr(predicate::str::contains("source-b"));

    assert_eq!(dir.read_file("dest"), "first");
}

#[test]
fn test_glob_in_subdirectory() {
    let dir = TestDir::new();
    dir.write_file("build/output.pkg", "payload");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["copy", "build/*.pkg", "--to", "dest.pkg"])
        .assert()
        .success();

    assert_eq!(dir.read_file("dest.pkg"), "payload");
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TestDir::new();
    dir.write_file("source", "payload");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["copy", "source", "--to", "dest", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would copy"));

    assert!(!dir.file_exists("dest"));
}

#[test]
fn test_dry_run_still_fails_on_no_match() {
    let dir = TestDir::new();

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["copy", "source*", "--to", "dest", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No package matches"));
}

#[test]
fn test_copy_into_missing_cache_dir_fails() {
    let dir = TestDir::new();
    dir.write_file("source", "payload");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["copy", "source*", "--cache-dir", "no-such-dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to copy"));

    assert!(!dir.file_exists("no-such-dir/source"));
}

#[test]
fn test_verbose_reports_resolution() {
    let dir = TestDir::new();
    dir.write_file("source", "payload");

    pkgcopy_cmd()
        .current_dir(&dir.path)
        .args(["-v", "copy", "source", "--to", "dest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolved source: source"))
        .stdout(predicate::str::contains("Destination: dest"));
}
