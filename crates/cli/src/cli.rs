//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::stats::UNKNOWN_DRIVER;

/// Runs benchmark bundles headlessly and aggregates per-driver results
#[derive(Parser)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TALLY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the bundle and record its report
    Run(RunArgs),
    /// Render recorded results
    Report(ReportArgs),
    /// Initialize tally configuration
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Bundle executable (overrides [bundle] command in tally.toml)
    #[arg(value_name = "BUNDLE")]
    pub bundle: Option<PathBuf>,

    /// Arguments passed through to the bundle
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Driver name results are recorded under
    #[arg(long, env = "DRIVER_NAME", default_value = UNKNOWN_DRIVER, value_name = "NAME")]
    pub driver: String,

    /// Aggregate file path (overrides [stats] path)
    #[arg(long, value_name = "PATH")]
    pub stats: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Aggregate file path (overrides [stats] path)
    #[arg(long, value_name = "PATH")]
    pub stats: Option<PathBuf>,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
