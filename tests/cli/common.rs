//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("a4code")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bracket markup"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("a4code")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("a4code")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("a4code")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_render_help() {
    cargo_bin_cmd!("a4code")
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strip-tags"));
}

#[test]
fn test_missing_config_file() {
    cargo_bin_cmd!("a4code")
        .args(["render", "--config", "/nonexistent/a4code.toml"])
        .write_stdin("x")
        .assert()
        .failure();
}
