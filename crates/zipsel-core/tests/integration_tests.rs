//! Integration tests for zipsel-core.
//!
//! These tests drive full create and extract workflows with real
//! filesystem operations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use zipsel_core::ArchiveError;
use zipsel_core::CompressionLevel;
use zipsel_core::CreateConfig;
use zipsel_core::EncryptionMethod;
use zipsel_core::ExtractConfig;
use zipsel_core::is_archive_file;

fn lossy(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn populate_source(root: &Path) {
    fs::write(root.join("main.cpp"), "int main() { return 0; }").unwrap();
    fs::write(root.join("notes.txt"), "some notes").unwrap();
    fs::write(root.join("scratch.tmp"), "scratch").unwrap();
    fs::create_dir_all(root.join("src/util")).unwrap();
    fs::write(root.join("src/lib.cpp"), "// lib").unwrap();
    fs::write(root.join("src/util/helper.cpp"), "// helper").unwrap();
    fs::write(root.join("src/util/helper.tmp"), "stale").unwrap();
}

#[test]
fn test_create_then_extract_preserves_content() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();
    let archive = work.path().join("backup.zip");

    let config = CreateConfig::new(&archive)
        .with_input_paths(vec![lossy(source.path())])
        .with_compression(CompressionLevel::Maximum);
    let report = zipsel_core::create(&config).unwrap();
    assert_eq!(report.files_added, 6);
    assert!(is_archive_file(&archive));

    let dest = work.path().join("restored");
    let config = ExtractConfig::new(&archive, &dest);
    let report = zipsel_core::extract(&config).unwrap();
    assert_eq!(report.files_extracted, 6);

    assert_eq!(
        fs::read_to_string(dest.join("main.cpp")).unwrap(),
        "int main() { return 0; }"
    );
    assert_eq!(
        fs::read_to_string(dest.join("src/util/helper.cpp")).unwrap(),
        "// helper"
    );
}

#[test]
fn test_exclude_dominates_include_end_to_end() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();
    let archive = work.path().join("backup.zip");

    // scratch.tmp and src/util/helper.tmp are selected by the directory
    // input but excluded by the pattern; exclude must win.
    let config = CreateConfig::new(&archive)
        .with_input_paths(vec![lossy(source.path())])
        .with_exclude_paths(vec!["*.tmp".to_string()]);
    let report = zipsel_core::create(&config).unwrap();
    assert_eq!(report.files_added, 4);

    let dest = work.path().join("restored");
    zipsel_core::extract(&ExtractConfig::new(&archive, &dest)).unwrap();

    assert!(dest.join("main.cpp").exists());
    assert!(dest.join("src/lib.cpp").exists());
    assert!(!dest.join("scratch.tmp").exists());
    assert!(!dest.join("src/util/helper.tmp").exists());
}

#[test]
fn test_selective_extraction_by_extension() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();
    let archive = work.path().join("backup.zip");

    let config = CreateConfig::new(&archive).with_input_paths(vec![lossy(source.path())]);
    zipsel_core::create(&config).unwrap();

    let dest = work.path().join("restored");
    let config =
        ExtractConfig::new(&archive, &dest).with_include_paths(vec![".cpp".to_string()]);
    let report = zipsel_core::extract(&config).unwrap();

    assert_eq!(report.files_extracted, 3);
    assert!(dest.join("main.cpp").exists());
    assert!(dest.join("src/util/helper.cpp").exists());
    assert!(!dest.join("notes.txt").exists());
}

#[test]
fn test_encrypted_archive_end_to_end() {
    let source = TempDir::new().unwrap();
    fs::write(source.path().join("secret.txt"), "classified").unwrap();
    let work = TempDir::new().unwrap();
    let archive = work.path().join("vault.zip");

    let config = CreateConfig::new(&archive)
        .with_input_paths(vec![lossy(source.path())])
        .with_password(Some("correct horse".to_string()))
        .with_encryption(EncryptionMethod::Aes256);
    zipsel_core::create(&config).unwrap();

    // Wrong password fails, right password succeeds.
    let dest = work.path().join("restored");
    let wrong = ExtractConfig::new(&archive, &dest).with_password(Some("guess".to_string()));
    assert!(matches!(
        zipsel_core::extract(&wrong),
        Err(ArchiveError::IncorrectPassword)
    ));

    let right =
        ExtractConfig::new(&archive, &dest).with_password(Some("correct horse".to_string()));
    let report = zipsel_core::extract(&right).unwrap();
    assert_eq!(report.files_extracted, 1);
    assert_eq!(
        fs::read_to_string(dest.join("secret.txt")).unwrap(),
        "classified"
    );
}

#[test]
fn test_deterministic_entry_order() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();

    let mut orders = Vec::new();
    for name in ["first.zip", "second.zip"] {
        let archive = work.path().join(name);
        let config = CreateConfig::new(&archive).with_input_paths(vec![lossy(source.path())]);
        zipsel_core::create(&config).unwrap();

        let file = fs::File::open(&archive).unwrap();
        let mut zip = zip::ZipArchive::new(file).unwrap();
        let names: Vec<String> = (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect();
        orders.push(names);
    }

    assert_eq!(orders[0], orders[1]);
    let mut sorted = orders[0].clone();
    sorted.sort();
    assert_eq!(orders[0], sorted);
}

#[test]
fn test_hostile_archive_writes_nothing() {
    let work = TempDir::new().unwrap();
    let archive = work.path().join("hostile.zip");
    {
        use std::io::Write;
        let file = fs::File::create(&archive).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("harmless.txt", options).unwrap();
        zip.write_all(b"ok").unwrap();
        zip.start_file("../../escape.txt", options).unwrap();
        zip.write_all(b"bad").unwrap();
        zip.finish().unwrap();
    }

    let dest = work.path().join("out");
    let result = zipsel_core::extract(&ExtractConfig::new(&archive, &dest));

    assert!(matches!(
        result,
        Err(ArchiveError::PathTraversalAttempt { .. })
    ));
    assert!(!dest.join("harmless.txt").exists());
    assert!(!work.path().join("escape.txt").exists());
}

#[test]
fn test_mixed_inputs_and_dedup() {
    let source = TempDir::new().unwrap();
    populate_source(source.path());
    let work = TempDir::new().unwrap();
    let archive = work.path().join("backup.zip");

    // The explicit file is also reachable via the directory root; it must
    // appear exactly once.
    let config = CreateConfig::new(&archive).with_input_paths(vec![
        lossy(source.path()),
        lossy(&source.path().join("notes.txt")),
    ]);
    let report = zipsel_core::create(&config).unwrap();
    assert_eq!(report.files_added, 6);
}
