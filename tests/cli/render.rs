//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin_to_stdout() {
    cargo_bin_cmd!("a4code")
        .arg("render")
        .write_stdin("[b Bold [i Italic]] plain")
        .assert()
        .success()
        .stdout("<strong>Bold <i>Italic</i></strong> plain");
}

#[test]
fn test_render_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("post.a4");
    fs::write(&test_file, "[b bold").unwrap();

    cargo_bin_cmd!("a4code")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<strong>bold</strong>");
}

#[test]
fn test_render_strip_tags_mode() {
    cargo_bin_cmd!("a4code")
        .args(["render", "--mode", "strip-tags"])
        .write_stdin("one\ntwo")
        .assert()
        .success()
        .stdout("one\ntwo");
}

#[test]
fn test_render_words_only_mode() {
    cargo_bin_cmd!("a4code")
        .args(["render", "--mode", "words-only"])
        .write_stdin("[b a]<b>")
        .assert()
        .success()
        .stdout("a b ");
}

#[test]
fn test_render_invalid_mode() {
    cargo_bin_cmd!("a4code")
        .args(["render", "--mode", "pdf"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_render_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "flavor = \"extended\"\nmode = \"strip-tags\"\n").unwrap();

    cargo_bin_cmd!("a4code")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("[sup 2]\n")
        .assert()
        .success()
        .stdout("<sup>2</sup>\n");
}

#[test]
fn test_render_discovers_config_next_to_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("a4code.toml"),
        "flavor = \"extended\"\nsanitize_links = true\n",
    )
    .unwrap();
    let test_file = temp_dir.path().join("post.a4");
    fs::write(&test_file, "[link javascript:alert(1) click]").unwrap();

    cargo_bin_cmd!("a4code")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("click");
}

#[test]
fn test_render_rejects_oversized_input() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("limits.toml");
    fs::write(&config_file, "max_input_bytes = 4\n").unwrap();

    cargo_bin_cmd!("a4code")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("too long")
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit is 4"));
}
