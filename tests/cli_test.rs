//! CLI exits that happen before any prompt

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn multipr(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("multipr").unwrap();
    cmd.current_dir(dir.path()).env_clear();
    cmd
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    multipr(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--env-file"));
}

#[test]
fn test_missing_token_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    multipr(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_ACCESS_TOKEN is not set"));
}

#[test]
fn test_missing_owner_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    multipr(&temp)
        .env("GITHUB_ACCESS_TOKEN", "ghp_test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("REPOSITORY_OWNER is not set"));
}

#[test]
fn test_invalid_repository_list() {
    let temp = TempDir::new().unwrap();
    multipr(&temp)
        .env("GITHUB_ACCESS_TOKEN", "ghp_test")
        .env("REPOSITORY_OWNER", "acme")
        .env("SELECTABLE_REPOSITORIES", "svc-a,svc-b")
        .env("SELECTABLE_BRANCHES", r#"["main"]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("SELECTABLE_REPOSITORIES"));
}

#[test]
fn test_malformed_env_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".env"), "THIS LINE IS NOT VALID\n").unwrap();

    multipr(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading env file"));
}

#[test]
fn test_explicit_env_file_must_exist() {
    let temp = TempDir::new().unwrap();
    multipr(&temp)
        .args(["--env-file", "missing.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.env"));
}

#[test]
fn test_env_file_fills_gaps_without_overriding() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".env"),
        "GITHUB_ACCESS_TOKEN=ghp_from_file\n\
         REPOSITORY_OWNER=acme\n\
         SELECTABLE_REPOSITORIES='[\"svc-a\"]'\n",
    )
    .unwrap();

    // Token and owner come from the file; the process value for the list wins
    // over the file's valid one and fails to parse.
    multipr(&temp)
        .env("SELECTABLE_REPOSITORIES", "not json")
        .env("SELECTABLE_BRANCHES", r#"["main"]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("SELECTABLE_REPOSITORIES"))
        .stderr(predicate::str::contains("is not set").not());
}

#[test]
fn test_completions() {
    let temp = TempDir::new().unwrap();
    multipr(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("multipr"));
}
