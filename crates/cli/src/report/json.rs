// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.
//!
//! The persisted stats shape is the public shape, so JSON output is the
//! aggregate as-is, pretty-printed.

use std::io::Write;

use termcolor::WriteColor;

use super::ReportFormatter;
use crate::stats::Stats;

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, stats: &Stats, out: &mut dyn WriteColor) -> anyhow::Result<()> {
        writeln!(out, "{}", serde_json::to_string_pretty(stats)?)?;
        Ok(())
    }

    fn format_empty(&self, out: &mut dyn WriteColor) -> anyhow::Result<()> {
        writeln!(out, "{}", serde_json::to_string_pretty(&Stats::default())?)?;
        Ok(())
    }
}
