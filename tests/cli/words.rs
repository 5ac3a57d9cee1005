//! Words subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn test_words_one_per_line() {
    cargo_bin_cmd!("a4code")
        .arg("words")
        .write_stdin("[b Hello], hello <em>World</em>!")
        .assert()
        .success()
        .stdout("em\nhello\nworld\n");
}

#[test]
fn test_words_json() {
    cargo_bin_cmd!("a4code")
        .args(["words", "--json"])
        .write_stdin("Rust & rust; forum-post")
        .assert()
        .success()
        .stdout("[\"forum-post\",\"rust\"]\n");
}

#[test]
fn test_words_empty_input() {
    cargo_bin_cmd!("a4code")
        .arg("words")
        .write_stdin("[b] ] [")
        .assert()
        .success()
        .stdout("");
}
