//! tally binary entry point.

mod cmd_init;
mod cmd_report;
mod cmd_run;

use clap::Parser;

use tally::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(matches!(&cli.command, Command::Run(args) if args.verbose));

    match &cli.command {
        Command::Run(args) => cmd_run::run(&cli, args),
        Command::Report(args) => cmd_report::run(&cli, args),
        Command::Init(args) => cmd_init::run(args),
    }
}

/// Diagnostics go to stderr; `TALLY_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    let default = if verbose { "tally=debug" } else { "tally=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("TALLY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
