//! CLI argument-parsing and pure-subcommand tests.
//!
//! Anything that would actually shell out to yum or rpm is covered by the
//! library's service tests over scripted doubles; here we only exercise
//! what runs without either tool: help text, argument validation, the
//! version-compare verbs, and config-file handling.

use assert_cmd::Command;
use predicates::prelude::*;
use test_common::{TempDir, create_config_file};

fn drover() -> Command {
    Command::cargo_bin("drover-cli").expect("binary builds")
}

#[test]
fn help_lists_the_operations() {
    drover()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("upgrade"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn unknown_subcommand_fails() {
    drover()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn install_requires_a_package_name() {
    drover().arg("install").assert().failure();
}

#[test]
fn compare_less_than() {
    drover()
        .args(["compare", "0.2.4-0", "<", "0.2.4.1-0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn compare_rejects_unknown_operator() {
    drover()
        .args(["compare", "1.0", "~=", "2.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown comparison operator"));
}

#[test]
fn compare_versions_orders_pair() {
    drover()
        .args(["compare-versions", "1.0-1", "2.0-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-1"));

    drover()
        .args(["compare-versions", "2.0-1", "2.0-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0"));
}

#[test]
fn compare_versions_fails_on_malformed_input() {
    drover()
        .args(["compare-versions", "x:1.0", "1.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not compare"));
}

#[test]
fn compare_versions_json_output() {
    drover()
        .args(["--json", "compare-versions", "1.0", "2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-1"));
}

#[test]
fn explicit_config_file_must_exist() {
    drover()
        .args(["--config", "/nonexistent/drover.yaml", "refresh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn bad_config_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = create_config_file(&dir, "yum_command: [unclosed");

    drover()
        .args(["--config"])
        .arg(&path)
        .args(["compare", "1.0", "<", "2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML parsing error"));
}

#[test]
fn valid_config_file_is_accepted_for_pure_commands() {
    let dir = TempDir::new().unwrap();
    let path = create_config_file(&dir, "yum_command: dnf\nversions_as_list: \"yes\"\n");

    drover()
        .args(["--config"])
        .arg(&path)
        .args(["compare", "1.0", "<", "2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}
