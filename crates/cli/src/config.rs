// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for tally.toml.
//!
//! Unknown keys warn rather than error, so a config written for a newer
//! tally still loads. A config file that exists but cannot be read or
//! parsed is a hard error: it was authored deliberately.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::discovery;
use crate::stats::DEFAULT_STATS_PATH;

/// Top-level tally.toml shape. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bundle: BundleConfig,
    pub stats: StatsConfig,
}

impl Config {
    /// Effective stats path: CLI override, else `[stats] path`, made
    /// absolute against `cwd`.
    pub fn stats_path(&self, override_path: Option<&Path>, cwd: &Path) -> PathBuf {
        let path = override_path.unwrap_or(&self.stats.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        }
    }
}

/// `[bundle]` table: what to run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Bundle executable to run.
    pub command: Option<PathBuf>,
    /// Extra arguments passed to the bundle.
    pub args: Vec<String>,
}

/// `[stats]` table: where results accumulate.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Aggregate file location.
    pub path: PathBuf,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STATS_PATH),
        }
    }
}

/// Errors from loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load a config file, warning on stderr about unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: toml::Value = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    warn_unknown_keys(&value, path);
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the effective config: an explicitly named file, else discovery
/// from `cwd` upward, else built-in defaults.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => load_with_warnings(path),
        None => match discovery::find_config(cwd) {
            Some(path) => load_with_warnings(&path),
            None => Ok(Config::default()),
        },
    }
}

const TOP_KEYS: &[&str] = &["bundle", "stats"];
const BUNDLE_KEYS: &[&str] = &["command", "args"];
const STATS_KEYS: &[&str] = &["path"];

fn warn_unknown_keys(value: &toml::Value, path: &Path) {
    let Some(table) = value.as_table() else {
        return;
    };
    for (key, sub) in table {
        if !TOP_KEYS.contains(&key.as_str()) {
            eprintln!("warning: unknown key `{}` in {}", key, path.display());
            continue;
        }
        let known: &[&str] = match key.as_str() {
            "bundle" => BUNDLE_KEYS,
            "stats" => STATS_KEYS,
            _ => &[],
        };
        let Some(sub) = sub.as_table() else {
            continue;
        };
        for sub_key in sub.keys() {
            if !known.contains(&sub_key.as_str()) {
                eprintln!(
                    "warning: unknown key `{}.{}` in {}",
                    key,
                    sub_key,
                    path.display()
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
