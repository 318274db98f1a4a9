//! Specs for `tally report`: rendering recorded results.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use serde_json::json;

use super::prelude::*;

const SAMPLE_STATS: &str = r#"{
  "drivers": ["linux-chrome", "mac-safari"],
  "data": {
    "time": [42, 57],
    "mem": [null, 99]
  }
}"#;

#[test]
fn empty_aggregate_prints_placeholder() {
    let sandbox = Sandbox::new();

    tally_cmd()
        .current_dir(sandbox.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicates::str::contains("no recorded runs"));
}

#[test]
fn text_report_lists_drivers_and_their_metrics() {
    let sandbox = Sandbox::new();
    sandbox.write("stats.json", SAMPLE_STATS);

    tally_cmd()
        .current_dir(sandbox.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicates::str::contains("linux-chrome\n  time: 42\n"))
        .stdout(predicates::str::contains("mac-safari\n  mem: 99\n  time: 57\n"));
}

#[test]
fn text_report_omits_unset_positions() {
    let sandbox = Sandbox::new();
    sandbox.write("stats.json", SAMPLE_STATS);

    let assert = tally_cmd()
        .current_dir(sandbox.path())
        .arg("report")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let chrome_block = stdout.split("mac-safari").next().unwrap();
    assert!(!chrome_block.contains("mem"));
}

#[test]
fn json_report_echoes_the_aggregate_shape() {
    let sandbox = Sandbox::new();
    sandbox.write("stats.json", SAMPLE_STATS);

    let assert = tally_cmd()
        .current_dir(sandbox.path())
        .args(["report", "--output", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        parsed,
        json!({
            "drivers": ["linux-chrome", "mac-safari"],
            "data": {"mem": [null, 99], "time": [42, 57]}
        })
    );
}

#[test]
fn corrupt_aggregate_renders_as_empty() {
    let sandbox = Sandbox::new();
    sandbox.write("stats.json", "{{{ nope");

    tally_cmd()
        .current_dir(sandbox.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicates::str::contains("no recorded runs"));
}

#[test]
fn stats_flag_selects_the_file_to_render() {
    let sandbox = Sandbox::new();
    sandbox.write("other.json", SAMPLE_STATS);

    tally_cmd()
        .current_dir(sandbox.path())
        .args(["report", "--stats", "other.json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("linux-chrome"));
}
