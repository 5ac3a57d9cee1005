//! Quote subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_quote_whole_input() {
    cargo_bin_cmd!("a4code")
        .args(["quote", "--user", "bob"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("[quoteof \"bob\" hello]\n");
}

#[test]
fn test_quote_escapes_user_name() {
    cargo_bin_cmd!("a4code")
        .args(["quote", "--user", "Arran \"The Man\"", "--trim"])
        .write_stdin("  hi\n")
        .assert()
        .success()
        .stdout("[quoteof \"Arran \\\"The Man\\\"\" hi]\n");
}

#[test]
fn test_quote_paragraphs_drops_nested_quotes() {
    cargo_bin_cmd!("a4code")
        .args(["quote", "--user", "user", "--paragraphs"])
        .write_stdin("Para 1\n\n[quoteof \"M\" [quoteof \"a\" asdf]]\n\nPara 2")
        .assert()
        .success()
        .stdout("[quoteof \"user\" Para 1]\n\n\n\n[quoteof \"user\" Para 2]\n");
}

#[test]
fn test_quote_output_renders() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a4code.toml"), "flavor = \"extended\"\n").unwrap();
    let post = dir.path().join("reply.a4");
    std::fs::write(&post, "[quoteof \"Arran on messenger\" hi]").unwrap();

    cargo_bin_cmd!("a4code")
        .args(["render"])
        .arg(&post)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote of Arran on messenger:"));
}

#[test]
fn test_quote_requires_user() {
    cargo_bin_cmd!("a4code")
        .arg("quote")
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--user"));
}
