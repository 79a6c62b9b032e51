//! End-to-end tests for the decl_count binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;

fn decl_count() -> Command {
    Command::cargo_bin("decl_count").unwrap()
}

fn write_fixture(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn default_mode_prints_the_bare_total() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        dir.path(),
        "token.sol",
        "contract Token {\nlibrary SafeMath {\nfunction f() { // contract\n",
    );
    write_fixture(dir.path(), "vault.sol", "contract Vault is Base {\n");

    decl_count()
        .arg(dir.path())
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn empty_directory_prints_zero() {
    let dir = tempfile::tempdir().unwrap();

    decl_count()
        .arg(dir.path())
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn missing_directory_fails_naming_the_path() {
    decl_count()
        .arg("/no/such/dir")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("/no/such/dir"));
}

#[test]
fn subdirectory_entry_is_fatal_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "a.sol", "contract A {\n");
    std::fs::create_dir(dir.path().join("nested")).unwrap();

    decl_count()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nested"));
}

#[test]
fn keep_going_warns_and_counts_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "a.sol", "contract A {\ncontract B {\n");
    std::fs::create_dir(dir.path().join("nested")).unwrap();

    decl_count()
        .arg(dir.path())
        .arg("--keep-going")
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("Warning: skipped"));
}

#[test]
fn json_total_includes_loop_counts() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        dir.path(),
        "loops.sol",
        "contract C {\nfor (uint i;;) {\n\twhile (x) {\n",
    );

    let assert = decl_count()
        .arg(dir.path())
        .arg("--loops")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let json: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("Failed to parse JSON output");
    assert_eq!(json["declarations"], 1);
    assert_eq!(json["loops"], 2);
    assert_eq!(json["files"], 1);
}

#[test]
fn full_table_lists_files_and_total() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "a.sol", "contract A {\n");

    decl_count()
        .arg(dir.path())
        .arg("--output-mode")
        .arg("full")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.sol"))
        .stdout(predicate::str::contains("TOTAL (1 files)"))
        .stdout(predicate::str::contains("Completed: 1 files processed."));
}

#[test]
fn csv_output_with_total_row() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "a.sol", "contract A {\nlibrary L {\n");

    decl_count()
        .arg(dir.path())
        .arg("--output-mode")
        .arg("full")
        .arg("--format")
        .arg("csv")
        .arg("--total-row")
        .assert()
        .success()
        .stdout(predicate::str::contains("declarations,lines,path"))
        .stdout(predicate::str::contains("2,2,TOTAL"));
}

#[test]
fn sort_orders_the_full_listing() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "one.sol", "contract A {\n");
    write_fixture(dir.path(), "many.sol", "contract A {\ncontract B {\ncontract C {\n");

    let assert = decl_count()
        .arg(dir.path())
        .arg("--output-mode")
        .arg("full")
        .arg("--format")
        .arg("csv")
        .arg("--sort")
        .arg("decls:desc")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let many_pos = stdout.find("many.sol").unwrap();
    let one_pos = stdout.find("one.sol").unwrap();
    assert!(many_pos < one_pos);
}
