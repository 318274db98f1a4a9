// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted benchmark aggregate keyed by driver name.
//!
//! The stats file holds one column position per driver: `drivers[i]` names
//! the environment a run executed under, and `data[metric][i]` is that
//! driver's most recent value for the metric. Columns are sparse; a driver
//! that never reported a metric leaves `null` (or nothing, for trailing
//! positions) at its index.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default aggregate file location, relative to the working directory.
pub const DEFAULT_STATS_PATH: &str = "stats.json";

/// Driver identity recorded when none is configured.
///
/// Every run without a driver name lands on this one shared column, so two
/// unconfigured runs overwrite each other. That is the accepted behavior:
/// CI jobs are expected to export `DRIVER_NAME`.
pub const UNKNOWN_DRIVER: &str = "Unknown Driver";

/// A single reported measurement.
///
/// Bundles report numbers for timings and counts, strings for anything they
/// label themselves (browser versions, scenario names).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(n) => write!(f, "{n}"),
            MetricValue::Float(x) => write!(f, "{x}"),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(n: i64) -> Self {
        MetricValue::Int(n)
    }
}

impl From<f64> for MetricValue {
    fn from(x: f64) -> Self {
        MetricValue::Float(x)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

/// One bundle run's measurements, keyed by metric name.
pub type Report = BTreeMap<String, MetricValue>;

/// The persisted aggregate: driver identities plus per-metric columns
/// positionally aligned with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Distinct driver names, in first-seen order.
    pub drivers: Vec<String>,
    /// Per-metric value columns; `data[metric][i]` belongs to `drivers[i]`.
    pub data: BTreeMap<String, Vec<Option<MetricValue>>>,
}

impl Stats {
    /// Read aggregate state from `path`, or start empty.
    ///
    /// Prior state is read permissively: a missing, unreadable, or malformed
    /// file is discarded and the run starts from an empty aggregate. A
    /// corrupt file is therefore indistinguishable from an absent one.
    pub fn load_or_default(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("unreadable stats file {}: {}", path.display(), err);
                }
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(stats) => stats,
            Err(err) => {
                tracing::warn!(
                    "discarding malformed stats file {}: {}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Write the full aggregate to `path`, replacing prior contents in a
    /// single write. Parent directories are created if needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Merge one report into the aggregate under `driver`.
    ///
    /// The driver keeps its first-seen position for the lifetime of the
    /// file. Each reported metric's column grows with unset entries up to
    /// that position, and the new value overwrites whatever was recorded
    /// there before. Metrics absent from the report are left untouched.
    pub fn merge(&mut self, driver: &str, report: &Report) {
        let index = self.driver_index(driver);
        for (metric, value) in report {
            let column = self.data.entry(metric.clone()).or_default();
            if column.len() <= index {
                column.resize(index + 1, None);
            }
            column[index] = Some(value.clone());
        }
    }

    /// True when no run has ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Position of `driver` in `drivers`, appending it when unseen.
    fn driver_index(&mut self, driver: &str) -> usize {
        match self.drivers.iter().position(|d| d == driver) {
            Some(index) => index,
            None => {
                self.drivers.push(driver.to_string());
                self.drivers.len() - 1
            }
        }
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
