//! CLI help and version surface tests.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the hs binary.
fn hs() -> Command {
    let mut cmd = cargo_bin_cmd!("hs");
    cmd.env_remove("HS_CONFIG").env_remove("HS_CONFIG_DIR");
    cmd
}

#[test]
fn help_output_is_formatted() {
    hs().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Options:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn help_lists_all_subcommands() {
    hs().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("feed"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn subcommand_help_is_formatted() {
    hs().args(["batch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--export"));
}

#[test]
fn version_flag_contains_name_and_number() {
    hs().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hs"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

#[test]
fn unknown_subcommand_rejected() {
    hs().arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
