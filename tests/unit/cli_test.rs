//! Tests for the command-line interface

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn cardwarden(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("cardwarden"));
    cmd.env("HOME", home.path())
        .env_remove("CARDWARDEN_CONFIG")
        .env_remove("TRELLO_KEY")
        .env_remove("TRELLO_TOKEN")
        .env_remove("SLACK_WEBHOOK_URL");
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    cardwarden(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("cardwarden v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_json() {
    let home = TempDir::new().unwrap();
    cardwarden(&home)
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_tracked_without_config_uses_memory_store() {
    let home = TempDir::new().unwrap();
    cardwarden(&home)
        .arg("tracked")
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards are tracked."));
}

#[test]
fn test_tracked_lists_file_store() {
    let home = TempDir::new().unwrap();
    let store = home.path().join("tracked.json");
    std::fs::write(
        &store,
        r#"[{"card_id": "C1", "card_name": "Fix login", "created_at": "2026-01-01T00:00:00Z"}]"#,
    )
    .unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(
        &config,
        format!("[store]\nbackend = \"file\"\npath = {:?}\n", store.display().to_string()),
    )
    .unwrap();

    cardwarden(&home)
        .arg("--config")
        .arg(&config)
        .arg("tracked")
        .assert()
        .success()
        .stdout(predicate::str::contains("[C1] Fix login"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    cardwarden(&home)
        .args(["--config", "does-not-exist.toml", "tracked"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read config"));
}

#[test]
fn test_missing_env_config_fails() {
    let home = TempDir::new().unwrap();
    cardwarden(&home)
        .env("CARDWARDEN_CONFIG", home.path().join("missing.toml"))
        .arg("tracked")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read config"));
}

#[test]
fn test_check_unknown_board_fails() {
    let home = TempDir::new().unwrap();
    cardwarden(&home)
        .args(["check", "C1", "--board", "B404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("board B404 is not configured"));
}
