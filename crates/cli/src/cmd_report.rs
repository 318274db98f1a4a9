// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.
//!
//! Loads the stats file and renders it in text or JSON format.

use termcolor::StandardStream;

use tally::cli::{Cli, ReportArgs};
use tally::config;
use tally::report;
use tally::stats::Stats;

/// Run the `tally report` command.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;
    let stats_path = config.stats_path(args.stats.as_deref(), &cwd);

    // Same permissive read as the aggregator: absent or corrupt renders as
    // an empty aggregate.
    let stats = Stats::load_or_default(&stats_path);

    let mut out = StandardStream::stdout(args.color.choice());
    report::format_report(args.output, &stats, &mut out)
}
