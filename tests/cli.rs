//! CLI-level tests
//!
//! These exercise argument parsing and local validation only; nothing
//! here touches the network (validation failures happen before any
//! request is sent).

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn psstbin(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("psstbin").unwrap();
    cmd.env("PSSTBIN_DATA_DIR", data_dir.path());
    cmd.env_remove("PSSTBIN_API_URL");
    cmd
}

#[test]
fn help_describes_the_service() {
    let dir = TempDir::new().unwrap();
    psstbin(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("one-time paste"));
}

#[test]
fn create_without_content_fails() {
    let dir = TempDir::new().unwrap();
    psstbin(&dir)
        .args(["create"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file or --text"));
}

#[test]
fn create_rejects_bad_paste_id() {
    let dir = TempDir::new().unwrap();
    psstbin(&dir)
        .args(["create", "--id", "bad id!", "--text", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Paste id"));
}

#[test]
fn create_rejects_short_flag_password() {
    let dir = TempDir::new().unwrap();
    psstbin(&dir)
        .args([
            "create", "--text", "hello", "--encrypt", "--password", "short",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));
}

#[test]
fn password_flag_requires_encrypt() {
    let dir = TempDir::new().unwrap();
    psstbin(&dir)
        .args(["create", "--text", "hello", "--password", "longenough"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--encrypt"));
}

#[test]
fn get_rejects_bad_paste_id() {
    let dir = TempDir::new().unwrap();
    psstbin(&dir)
        .args(["get", "no/slashes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Paste id"));
}

#[test]
fn status_without_consume_warns_and_does_nothing() {
    let dir = TempDir::new().unwrap();
    psstbin(&dir)
        .args(["status", "some-paste-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--consume"));
}

#[test]
fn config_shows_resolved_settings() {
    let dir = TempDir::new().unwrap();
    psstbin(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("API URL"))
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}

#[test]
fn api_url_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    psstbin(&dir)
        .args(["--api-url", "https://staging.example.com", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://staging.example.com"));
}
