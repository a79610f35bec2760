//! Integration tests for the `grannymail` CLI binary.
//!
//! These tests exercise the CLI as a subprocess, verifying exit codes,
//! stdout output, and the files an export leaves on disk.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use std::process::Command;

/// Helper: locate the `grannymail` binary built by `cargo test`.
fn grannymail_bin() -> String {
    let path = env!("CARGO_BIN_EXE_grannymail");
    assert!(
        Path::new(path).exists(),
        "grannymail binary not found at {path}"
    );
    path.to_owned()
}

/// Helper: run grannymail with args and return (`exit_code`, stdout, stderr).
fn run(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(grannymail_bin())
        .args(args)
        .env_remove("GRANNYMAIL_SITE_URL")
        .output()
        .expect("failed to execute grannymail");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ── Version & help ───────────────────────────────────────────────────

#[test]
fn test_version_flag() {
    let (code, stdout, _) = run(&["--version"]);
    assert_eq!(code, 0, "grannymail --version should exit 0");
    assert!(stdout.contains("grannymail"), "version output: {stdout}");
}

#[test]
fn test_help_lists_commands() {
    let (code, stdout, _) = run(&["--help"]);
    assert_eq!(code, 0);
    for sub in ["export", "render", "routes"] {
        assert!(stdout.contains(sub), "help should list '{sub}'");
    }
}

// ── routes ───────────────────────────────────────────────────────────

#[test]
fn test_routes_lists_both_pages() {
    let (code, stdout, _) = run(&["routes"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("/ "));
    assert!(lines[1].starts_with("/privacy-policy "));
}

// ── render ───────────────────────────────────────────────────────────

#[test]
fn test_render_landing() {
    let (code, stdout, _) = run(&["render", "/"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Record a voice memo"));
    assert!(stdout.contains("GrannyMail is currently in closed alpha."));
}

#[test]
fn test_render_policy() {
    let (code, stdout, _) = run(&["render", "/privacy-policy"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("PRIVACY POLICY"));
    assert!(stdout.contains("dominique.c.a.paul@gmail.com"));
}

#[test]
fn test_render_uses_site_url() {
    let (code, stdout, _) = run(&["render", "/", "--site-url", "http://localhost:3000/"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("<link rel=\"canonical\" href=\"http://localhost:3000/\"/>"));
}

#[test]
fn test_render_unknown_path_fails() {
    let (code, stdout, stderr) = run(&["render", "/dashboard"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("/dashboard"), "stderr: {stderr}");
}

#[test]
fn test_render_is_deterministic() {
    let (_, first, _) = run(&["render", "/privacy-policy"]);
    let (_, second, _) = run(&["render", "/privacy-policy"]);
    assert_eq!(first, second);
}

// ── export ───────────────────────────────────────────────────────────

#[test]
fn test_export_writes_site() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dist");
    let (code, stdout, _) = run(&["export", "--out", out.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Exported 3 files"));

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("Record a voice memo"));

    let policy = fs::read_to_string(out.join("privacy-policy").join("index.html")).unwrap();
    assert!(policy.contains("PRIVACY POLICY"));

    assert!(out.join("404.html").is_file());
}

#[test]
fn test_export_matches_render() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run(&["export", "--out", dir.path().to_str().unwrap()]);
    assert_eq!(code, 0);

    let (_, rendered, _) = run(&["render", "/privacy-policy"]);
    let exported =
        fs::read_to_string(dir.path().join("privacy-policy").join("index.html")).unwrap();
    assert_eq!(exported, rendered);
}

#[test]
fn test_export_into_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"x").unwrap();

    let (code, _, stderr) = run(&["export", "--out", blocker.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("failed to export site"), "stderr: {stderr}");
}
