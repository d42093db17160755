//! Integration tests for the listd CLI

use assert_cmd::cargo;
use predicates::prelude::*;

fn listd() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("listd"))
}

#[test]
fn test_version_flag() {
    listd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("listd"));
}

#[test]
fn test_version_subcommand() {
    listd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("listd v"));
}

#[test]
fn test_help() {
    listd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("singly-linked list"));
}

#[test]
fn test_no_args_shows_info() {
    listd()
        .assert()
        .success()
        .stdout(predicate::str::contains("listd"))
        .stdout(predicate::str::contains("listd serve"));
}

#[test]
fn test_serve_help_lists_flags() {
    listd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn test_unknown_subcommand_fails() {
    listd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
