//! Runs the compiled binary and checks its streams and exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run(args: &[&PathBuf], extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plagiarism-detector"))
        .args(args)
        .args(extra)
        .output()
        .unwrap()
}

fn setup() -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let synonyms = write(dir.path(), "syns.txt", "run sprint jog\n");
    let base = write(dir.path(), "file1.txt", "go for a run\n");
    let comparison = write(dir.path(), "file2.txt", "go for a jog\n");
    (dir, synonyms, base, comparison)
}

#[test]
fn test_success_prints_single_line() {
    let (_dir, synonyms, base, comparison) = setup();

    let output = run(&[&synonyms, &base, &comparison], &["2"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "The plagiarism detected is 100%\n"
    );
}

#[test]
fn test_default_tuple_size_warns() {
    let (_dir, synonyms, base, comparison) = setup();

    let output = run(&[&synonyms, &base, &comparison], &[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "The plagiarism detected is 100%\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("[WARN]"));
}

#[test]
fn test_json_format() {
    let (_dir, synonyms, base, comparison) = setup();

    let output = run(&[&synonyms, &base, &comparison], &["2", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["percentage"], "100");
    assert_eq!(value["tuple_size"], 2);
}

#[test]
fn test_wrong_argument_count_fails_with_usage() {
    let (_dir, synonyms, base, _comparison) = setup();

    let output = run(&[&synonyms, &base], &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_non_integer_tuple_size_fails() {
    let (_dir, synonyms, base, comparison) = setup();

    let output = run(&[&synonyms, &base, &comparison], &["three"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("[ERROR] "));
    assert!(stderr.contains("Invalid tuple size"));
}

#[test]
fn test_missing_file_fails_without_output() {
    let (dir, synonyms, base, _comparison) = setup();
    let missing = dir.path().join("nope.txt");

    let output = run(&[&synonyms, &base, &missing], &["2"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("[ERROR] "));
    assert!(stderr.contains("comparison file"));
    assert!(stderr.contains("nope.txt"));
}
