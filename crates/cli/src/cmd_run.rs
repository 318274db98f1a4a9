// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tally run` command implementation.
//!
//! Bootstraps the bundle and drains its event stream: log chunks stream to
//! stdout as they arrive, the one final report is merged into the stats
//! file under the current driver name.

use anyhow::Context;

use tally::aggregate::Aggregator;
use tally::bundle::Event;
use tally::cli::{Cli, RunArgs};
use tally::config;
use tally::harness;

/// Run the `tally run` command.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    let command = args.bundle.clone().or_else(|| config.bundle.command.clone()).context(
        "no bundle to run: pass one as an argument or set [bundle] command in tally.toml",
    )?;
    // Positional args only follow a positional bundle; with a configured
    // bundle the configured args apply.
    let bundle_args = if args.bundle.is_some() {
        args.args.clone()
    } else {
        config.bundle.args.clone()
    };
    let stats_path = config.stats_path(args.stats.as_deref(), &cwd);

    tracing::debug!(
        "running {} for driver {:?}, stats in {}",
        command.display(),
        args.driver,
        stats_path.display()
    );

    let (events, worker) = harness::start_process(&command, &bundle_args);
    let mut aggregator = Aggregator::new(&args.driver, stats_path, std::io::stdout());
    for event in events {
        match event {
            Event::Log(chunk) => aggregator.on_log(&chunk)?,
            Event::Result(report) => aggregator.on_result(&report)?,
        }
    }

    match worker.join() {
        Ok(result) => result,
        Err(_) => anyhow::bail!("bundle worker panicked"),
    }
}
