//! Command-line behavior of the fastmatch binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const KEYWORDS: &str = "\
# digits
0123456789\t10 digit long string
012345678\t9 digit long string
01234567\t8 digit long string
0123456
012345
01234\t5 digit long string
0123
012
01
0
Test
test
This is a test\tMultiple word string
Cat\tShort string
Bats\tSlightly longer short string
";

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("keywords.txt"), KEYWORDS).unwrap();
    dir
}

fn fastmatch(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fastmatch").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_search_by_distance_ranks_best_first() {
    let dir = workspace();
    let output = fastmatch(&dir)
        .args(["search", "keywords.txt", "Fat", "--distance", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let cat = stdout.find("Cat").expect("Cat listed");
    let bats = stdout.find("Bats").expect("Bats listed");
    assert!(cat < bats);
    assert!(stdout.contains("66.7%"));
}

#[test]
fn test_search_json() {
    let dir = workspace();
    let output = fastmatch(&dir)
        .args(["search", "keywords.txt", "0123456789", "--percent", "75", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let matches = json["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0]["keyword"], "0123456789");
    assert_eq!(matches[0]["value"], "10 digit long string");
    assert_eq!(json["threshold"]["percentage"], 75.0);
}

#[test]
fn test_search_value_defaults_to_line_number() {
    let dir = workspace();
    let output = fastmatch(&dir)
        .args(["search", "keywords.txt", "0123456", "-p", "100", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    // Line 1 is a comment, so "0123456" sits on line 5
    assert_eq!(json["matches"][0]["value"], "5");
}

#[test]
fn test_search_limit() {
    let dir = workspace();
    let output = fastmatch(&dir)
        .args(["search", "keywords.txt", "0123456789", "-p", "25", "--limit", "2", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["matches"].as_array().unwrap().len(), 2);
}

#[test]
fn test_search_ignore_whitespace() {
    let dir = workspace();
    fastmatch(&dir)
        .args(["search", "keywords.txt", "This is  atest", "-p", "100", "-w"])
        .assert()
        .success()
        .stdout(predicate::str::contains("This is a test"));
}

#[test]
fn test_search_no_match_exit_code() {
    let dir = workspace();
    fastmatch(&dir)
        .args(["search", "keywords.txt", "zzzzzzzz", "-p", "90"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No keywords"));
}

#[test]
fn test_search_missing_file() {
    let dir = workspace();
    fastmatch(&dir)
        .args(["search", "missing.txt", "Cat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_search_rejects_blank_keyword() {
    let dir = workspace();
    fs::write(dir.path().join("bad.txt"), "Cat\n \tvalue\n").unwrap();

    fastmatch(&dir)
        .args(["search", "bad.txt", "Cat", "-w"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_percent_and_distance_conflict() {
    let dir = workspace();
    fastmatch(&dir)
        .args(["search", "keywords.txt", "Cat", "-p", "50", "-d", "1"])
        .assert()
        .failure();
}

#[test]
fn test_config_file_sets_default_threshold() {
    let dir = workspace();
    fs::write(dir.path().join(".fastmatch.toml"), "[search]\nmax_distance = 1\n").unwrap();

    let output = fastmatch(&dir)
        .args(["search", "keywords.txt", "01234", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["matches"].as_array().unwrap().len(), 3);
    assert_eq!(json["threshold"]["max_distance"], 1);
}

#[test]
fn test_invalid_config_exit_code() {
    let dir = workspace();
    fs::write(dir.path().join("broken.toml"), "[search]\noptions = \"fold-case\"\n").unwrap();

    fastmatch(&dir)
        .args(["--config", "broken.toml", "search", "keywords.txt", "Cat"])
        .assert()
        .code(3);
}

#[test]
fn test_distance_command() {
    let dir = workspace();
    fastmatch(&dir)
        .args(["distance", "kitten", "sitting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 3"));
}

#[test]
fn test_distance_command_bounded() {
    let dir = workspace();
    fastmatch(&dir)
        .args(["distance", "kitten", "sitting", "--max", "2"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("more than 2"));
}

#[test]
fn test_distance_command_ignore_whitespace() {
    let dir = workspace();
    fastmatch(&dir)
        .args(["distance", "a b c", "abc", "-w", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"distance\": 0"));
}
