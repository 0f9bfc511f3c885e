use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn run(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_shred"))
        .args(args)
        .env_remove("SHRED_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn shreds_and_reports_each_pass() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"Hello, Canonical!").unwrap();

    let out = run(&[arg(&path)], b"");

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stdout.contains(&format!("Removed {}", path.display())), "stdout: {stdout}");
    for pass in 1..=3 {
        assert!(stderr.contains(&format!("Pass {pass}/3 completed")), "stderr: {stderr}");
    }
    assert!(!path.exists());
}

#[test]
fn passes_flag_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"data").unwrap();

    let out = run(&[arg(&path), "--passes", "1"], b"");

    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Pass 1/1 completed"));
    assert!(!stderr.contains("Pass 2/"));
    assert!(!path.exists());
}

#[test]
fn missing_file_exits_with_status_2() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let out = run(&[arg(&path)], b"");

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error: file not found"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
    assert!(!path.exists());
}

#[test]
fn confirmed_shred_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"data").unwrap();

    let out = run(&[arg(&path), "--confirm"], b"yes\n");

    assert_eq!(out.status.code(), Some(0));
    assert!(!path.exists());
}

#[test]
fn declined_confirmation_skips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"data").unwrap();

    let out = run(&[arg(&path), "-c"], b"n\n");

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Skipping"));
    assert_eq!(fs::read(&path).unwrap(), b"data");
}

#[test]
fn closed_stdin_at_prompt_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"Hello, Canonical!").unwrap();

    let out = run(&[arg(&path), "--confirm"], b"");

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: "));
    assert_eq!(fs::read(&path).unwrap(), b"Hello, Canonical!");
}

#[test]
fn negative_passes_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"data").unwrap();

    let out = run(&[arg(&path), "--passes", "-1"], b"");

    assert!(!out.status.success());
    assert!(path.exists());
}
