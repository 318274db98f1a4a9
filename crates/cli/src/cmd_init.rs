// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tally init` command implementation.

use anyhow::Context;

use tally::cli::InitArgs;

/// Starter configuration written by `tally init`.
const STARTER_CONFIG: &str = r#"# tally configuration

[bundle]
# Bundle executable and arguments that `tally run` starts when none are
# given on the command line.
# command = "./bench.bundle"
# args = []

[stats]
# Where aggregated results accumulate, one column per DRIVER_NAME.
path = "stats.json"
"#;

/// Run the `tally init` command.
pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    let path = std::env::current_dir()?.join("tally.toml");
    if path.exists() && !args.force {
        anyhow::bail!("tally.toml already exists (use --force to overwrite)");
    }
    std::fs::write(&path, STARTER_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
