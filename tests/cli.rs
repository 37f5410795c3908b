//! Command-line surface tests

use assert_cmd::Command;
use dirjson::test_utils::TestDir;
use predicates::prelude::*;

#[test]
fn test_missing_arguments_is_usage_error() {
    Command::cargo_bin("dirjson")
        .unwrap()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_root_exit_code() {
    let dir = TestDir::new();
    Command::cargo_bin("dirjson")
        .unwrap()
        .current_dir(dir.path())
        .args(["does-not-exist", "out.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: does-not-exist does not exist"));
}

#[test]
fn test_success_reports_totals() {
    let dir = TestDir::named("proj");
    dir.add_file("one.txt", "");
    dir.add_file("sub/two.txt", "");
    dir.add_file("sub/.three", "");

    Command::cargo_bin("dirjson")
        .unwrap()
        .current_dir(dir.parent())
        .args(["proj", "tree.json", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Directories: 2"))
        .stdout(predicate::str::contains("Files: 2"))
        .stdout(predicate::str::contains("Total items: 4"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let dir = TestDir::named("proj");
    dir.add_file("one.txt", "");

    Command::cargo_bin("dirjson")
        .unwrap()
        .current_dir(dir.parent())
        .args(["proj", "--stdout", "--log-level", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("entering directory"));
}

#[test]
fn test_view_malformed_document() {
    let dir = TestDir::new();
    dir.add_file("broken.json", "{ not json");

    Command::cargo_bin("dirjson")
        .unwrap()
        .current_dir(dir.path())
        .args(["broken.json", "--view"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot parse 'broken.json'"));
}

#[test]
fn test_find_requires_view() {
    Command::cargo_bin("dirjson")
        .unwrap()
        .args(["src", "out.json", "--find", "x"])
        .assert()
        .code(2);
}
