// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of the recorded aggregate.
//!
//! Reads the stats shape and outputs it in text or JSON format.

mod json;
mod text;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::stats::Stats;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for rendering the aggregate into various output formats.
pub trait ReportFormatter {
    /// Render recorded runs into `out`.
    fn format(&self, stats: &Stats, out: &mut dyn WriteColor) -> anyhow::Result<()>;

    /// Render the no-recorded-runs case into `out`.
    fn format_empty(&self, out: &mut dyn WriteColor) -> anyhow::Result<()>;
}

/// Render `stats` in the requested format.
///
/// An aggregate with no drivers renders through the format-specific empty
/// output.
pub fn format_report(
    format: OutputFormat,
    stats: &Stats,
    out: &mut dyn WriteColor,
) -> anyhow::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    if stats.is_empty() {
        formatter.format_empty(out)
    } else {
        formatter.format(stats, out)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
