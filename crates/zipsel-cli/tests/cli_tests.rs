//! Integration tests for zipsel-cli.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn zipsel_cmd() -> Command {
    cargo_bin_cmd!("zipsel")
}

fn populate_source(root: &Path) {
    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::write(root.join("b.log"), "log line").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/c.txt"), "gamma").unwrap();
}

#[test]
fn test_version_flag() {
    zipsel_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zipsel"));
}

#[test]
fn test_help_flag() {
    zipsel_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

#[test]
fn test_create_then_extract() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();
    let archive = work.path().join("out.zip");

    zipsel_cmd()
        .arg("create")
        .arg(&archive)
        .arg(source.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive created"));

    let dest = work.path().join("restored");
    zipsel_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction complete"));

    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(dest.join("sub/c.txt")).unwrap(), "gamma");
}

#[test]
fn test_create_with_exclude() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();
    let archive = work.path().join("out.zip");

    zipsel_cmd()
        .arg("create")
        .arg(&archive)
        .arg(source.path())
        .arg("--exclude")
        .arg("*.log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files added: 2"));
}

#[test]
fn test_create_json_output() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();
    let archive = work.path().join("out.zip");

    zipsel_cmd()
        .arg("--json")
        .arg("create")
        .arg(&archive)
        .arg(source.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\": \"create\""))
        .stdout(predicate::str::contains("\"files_added\": 3"));
}

#[test]
fn test_extract_with_include_filter() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();
    let archive = work.path().join("out.zip");

    zipsel_cmd()
        .arg("create")
        .arg(&archive)
        .arg(source.path())
        .assert()
        .success();

    let dest = work.path().join("restored");
    zipsel_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&dest)
        .arg("--include")
        .arg(".txt")
        .assert()
        .success();

    assert!(dest.join("a.txt").exists());
    assert!(!dest.join("b.log").exists());
}

#[test]
fn test_encryption_requires_password() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();

    zipsel_cmd()
        .arg("create")
        .arg(work.path().join("out.zip"))
        .arg(source.path())
        .arg("--encryption")
        .arg("aes256")
        .assert()
        .failure()
        .stderr(predicate::str::contains("password"));
}

#[test]
fn test_encrypted_roundtrip() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();
    let archive = work.path().join("vault.zip");

    zipsel_cmd()
        .arg("create")
        .arg(&archive)
        .arg(source.path())
        .arg("--encryption")
        .arg("aes256")
        .arg("--password")
        .arg("hunter2")
        .assert()
        .success();

    let dest = work.path().join("restored");
    zipsel_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&dest)
        .arg("--password")
        .arg("wrong")
        .assert()
        .failure()
        .stderr(predicate::str::contains("password"));

    zipsel_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&dest)
        .arg("--password")
        .arg("hunter2")
        .assert()
        .success();

    assert!(dest.join("a.txt").exists());
}

#[test]
fn test_probe_exit_codes() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();
    let archive = work.path().join("real.zip");

    zipsel_cmd()
        .arg("create")
        .arg(&archive)
        .arg(source.path())
        .assert()
        .success();

    zipsel_cmd()
        .arg("probe")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("ZIP archive"));

    let fake = work.path().join("fake.zip");
    fs::write(&fake, "just text").unwrap();
    zipsel_cmd()
        .arg("probe")
        .arg(&fake)
        .assert()
        .failure()
        .stdout(predicate::str::contains("not a ZIP archive"));
}

#[test]
fn test_match_exit_codes() {
    zipsel_cmd()
        .args(["match", "notes.txt", "*.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matched"));

    zipsel_cmd()
        .args(["match", "notes.txt", "*.log"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("no match"));
}

#[test]
fn test_match_reports_invalid_regex() {
    zipsel_cmd()
        .args(["match", "notes.txt", "[unclosed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn test_quiet_suppresses_output() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();

    zipsel_cmd()
        .arg("--quiet")
        .arg("create")
        .arg(work.path().join("out.zip"))
        .arg(source.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
