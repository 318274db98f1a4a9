//! Specs for `tally init`: starter configuration.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::prelude::*;

#[test]
fn init_writes_a_starter_config() {
    let sandbox = Sandbox::new();

    tally_cmd()
        .current_dir(sandbox.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("tally.toml"));

    let written = std::fs::read_to_string(sandbox.path().join("tally.toml")).unwrap();
    assert!(written.contains("[bundle]"));
    assert!(written.contains("[stats]"));
}

#[test]
fn init_refuses_to_overwrite() {
    let sandbox = Sandbox::new();
    sandbox.write("tally.toml", "# hand-written\n");

    tally_cmd()
        .current_dir(sandbox.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));

    let kept = std::fs::read_to_string(sandbox.path().join("tally.toml")).unwrap();
    assert_eq!(kept, "# hand-written\n");
}

#[test]
fn init_force_overwrites() {
    let sandbox = Sandbox::new();
    sandbox.write("tally.toml", "# hand-written\n");

    tally_cmd()
        .current_dir(sandbox.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let written = std::fs::read_to_string(sandbox.path().join("tally.toml")).unwrap();
    assert!(written.contains("[bundle]"));
}

#[test]
fn initialized_config_loads_cleanly() {
    let sandbox = Sandbox::new();

    tally_cmd()
        .current_dir(sandbox.path())
        .arg("init")
        .assert()
        .success();

    // The starter config parses without unknown-key warnings.
    tally_cmd()
        .current_dir(sandbox.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicates::str::contains("no recorded runs"))
        .stderr(predicates::str::is_empty());
}
