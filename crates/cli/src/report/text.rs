// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;

use termcolor::{ColorSpec, WriteColor};

use super::ReportFormatter;
use crate::stats::Stats;

/// Text format report formatter.
///
/// One block per driver, in first-seen order: a bold driver header, then
/// `metric: value` lines sorted by metric name. Positions a driver never
/// reported are omitted.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, stats: &Stats, out: &mut dyn WriteColor) -> anyhow::Result<()> {
        for (index, driver) in stats.drivers.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            out.set_color(ColorSpec::new().set_bold(true))?;
            writeln!(out, "{driver}")?;
            out.reset()?;

            for (metric, column) in &stats.data {
                if let Some(Some(value)) = column.get(index) {
                    writeln!(out, "  {metric}: {value}")?;
                }
            }
        }
        Ok(())
    }

    fn format_empty(&self, out: &mut dyn WriteColor) -> anyhow::Result<()> {
        writeln!(out, "no recorded runs")?;
        Ok(())
    }
}
