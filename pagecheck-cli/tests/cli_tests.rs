//! End-to-end tests for the `pagecheck` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const REFERENCE_PAGE: &str = include_str!("../../pagecheck/tests/fixtures/index.html");

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagecheck"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_default_path_reference_page_exits_zero() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("index.html"), REFERENCE_PAGE).unwrap();

    let out = run_in(tmp.path(), &[]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert_eq!(out.status.code(), Some(0), "stdout: {stdout}");
    assert!(stdout.contains("All 10 checks passed"), "stdout: {stdout}");
}

#[test]
fn test_failed_item_exits_one() {
    let tmp = TempDir::new().unwrap();
    let page = REFERENCE_PAGE.replace("<html lang=\"en\">", "<html>");
    fs::write(tmp.path().join("index.html"), page).unwrap();

    let out = run_in(tmp.path(), &[]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert_eq!(out.status.code(), Some(1), "stdout: {stdout}");
    assert!(
        stdout.contains("lang_attribute: html[lang]: expected \"en\", got null"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("1 of 10 checks failed: lang_attribute"));
}

#[test]
fn test_missing_file_exits_two() {
    let tmp = TempDir::new().unwrap();

    let out = run_in(tmp.path(), &[]);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert_eq!(out.status.code(), Some(2), "stderr: {stderr}");
    assert!(stderr.contains("not found"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn test_empty_file_exits_two() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("index.html"), "").unwrap();

    let out = run_in(tmp.path(), &[]);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert_eq!(out.status.code(), Some(2), "stderr: {stderr}");
    assert!(stderr.contains("read error"), "stderr: {stderr}");
    assert!(stderr.contains("File is empty"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn test_json_format_with_explicit_path() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("site")).unwrap();
    fs::write(tmp.path().join("site").join("page.html"), REFERENCE_PAGE).unwrap();

    let out = run_in(tmp.path(), &["site/page.html", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("\"ok\": true"), "stdout: {stdout}");
    assert!(stdout.contains("\"check\": \"responsive_markers\""));
}
