// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result aggregation: forward log chunks, persist the final report.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use crate::stats::{Report, Stats};

/// Consumes bundle events for one run.
///
/// Log chunks stream to `out` as they arrive; the one expected `result`
/// event is merged into the stats file under this aggregator's driver.
pub struct Aggregator<W: Write> {
    driver: String,
    stats_path: PathBuf,
    out: W,
}

impl<W: Write> Aggregator<W> {
    pub fn new(driver: impl Into<String>, stats_path: impl Into<PathBuf>, out: W) -> Self {
        Self {
            driver: driver.into(),
            stats_path: stats_path.into(),
            out,
        }
    }

    /// Forward one log chunk verbatim, unbuffered.
    ///
    /// Chunks are written in arrival order with no transformation; a write
    /// failure is fatal to the run.
    pub fn on_log(&mut self, chunk: &str) -> anyhow::Result<()> {
        self.out.write_all(chunk.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Merge `report` into the stats file under this aggregator's driver.
    ///
    /// Prior state is loaded permissively (absent or corrupt becomes empty),
    /// mutated in memory, and written back in one call, fully replacing the
    /// file. A second `result` event is not expected, but would simply
    /// re-run the merge against whatever is on disk by then.
    pub fn on_result(&mut self, report: &Report) -> anyhow::Result<()> {
        let mut stats = Stats::load_or_default(&self.stats_path);
        stats.merge(&self.driver, report);
        stats
            .save(&self.stats_path)
            .with_context(|| format!("failed to write {}", self.stats_path.display()))?;
        tracing::debug!(
            "recorded {} metric(s) for driver {:?} in {}",
            report.len(),
            self.driver,
            self.stats_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
