//! Tielink CLI - link prediction on email graphs from the command line.

use anyhow::Context;
use clap::Parser;
use tielink_cli::commands;
use tielink_cli::{Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        eprintln!("{}", formatter.error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli, formatter: &Formatter) -> anyhow::Result<()> {
    init_tracing()?;

    match cli.command {
        Command::Run(args) => {
            commands::execute_run(args, formatter).context("run failed")?;
        }
        Command::Stats(args) => {
            commands::execute_stats(args, formatter).context("stats failed")?;
        }
        Command::Config(args) => {
            commands::execute_config(args, formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}
