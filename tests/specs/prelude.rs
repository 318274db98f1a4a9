//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the tally binary.
///
/// Ambient driver/config variables are scrubbed so the host environment
/// never leaks into a spec.
pub fn tally_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tally"));
    cmd.env_remove("DRIVER_NAME");
    cmd.env_remove("TALLY_CONFIG");
    cmd.env_remove("TALLY_LOG");
    cmd
}

/// An isolated working directory for one spec.
///
/// Carries a `.git` marker so config discovery never walks above it.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an executable shell script standing in for a bundle.
    pub fn bundle(&self, name: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    /// A bundle that writes `report` as its result and nothing else.
    pub fn reporting_bundle(&self, name: &str, report: &str) -> PathBuf {
        self.bundle(name, &format!(r#"printf '%s' '{report}' > "$TALLY_REPORT""#))
    }

    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).unwrap();
    }

    /// Parse the stats file this sandbox's runs produced.
    pub fn stats_json(&self) -> serde_json::Value {
        self.stats_json_at("stats.json")
    }

    pub fn stats_json_at(&self, name: &str) -> serde_json::Value {
        let text = std::fs::read_to_string(self.path().join(name)).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}
