//! CLI output format tests.
//!
//! These tests verify that output formats work correctly and produce
//! valid, parseable output.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the hs binary.
fn hs() -> Command {
    let mut cmd = cargo_bin_cmd!("hs");
    cmd.env_remove("HS_CONFIG").env_remove("HS_CONFIG_DIR");
    cmd
}

mod format_option {
    use super::*;

    #[test]
    fn json_format_accepted() {
        hs().args(["--format", "json", "version"]).assert().success();
    }

    #[test]
    fn short_format_flag_accepted() {
        hs().args(["-f", "md", "version"]).assert().success();
    }

    #[test]
    fn summary_format_accepted() {
        hs().args(["--format", "summary", "version"])
            .assert()
            .success();
    }

    #[test]
    fn invalid_format_rejected() {
        hs().args(["--format", "xml", "version"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }
}

mod version_output {
    use super::*;

    #[test]
    fn json_version_parses() {
        let output = hs()
            .args(["--format", "json", "version"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["name"], "hs");
        assert!(value["schema_version"].is_string());
    }

    #[test]
    fn summary_version_is_one_line() {
        let output = hs()
            .args(["--format", "summary", "version"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.trim().lines().count(), 1);
        assert!(text.contains("schema"));
    }
}

mod analyze_output {
    use super::*;

    #[test]
    fn json_analyze_parses_and_has_bundle() {
        let output = hs()
            .args(["analyze", "Stock markets rally to record highs"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["record"]["sentiment"], "Positive");
        assert!(value["record"]["compound"].as_f64().unwrap() >= 0.05);
        assert!(value["record"]["pos"].as_f64().is_some());
        assert_eq!(value["scorer"], "lexicon");
    }

    #[test]
    fn md_analyze_renders_table() {
        hs().args(["-f", "md", "analyze", "Stock markets rally to record highs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("| Headline | Sentiment | Compound |"));
    }

    #[test]
    fn summary_analyze_is_one_line() {
        hs().args(["-f", "summary", "analyze", "Earthquake kills dozens"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Negative"));
    }
}
