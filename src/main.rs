use anyhow::{Context, Result};
use clap::Parser;
use pstats::cli::Cli;
use pstats::{run, RunConfig};
use std::io;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = RunConfig::from(Cli::parse());

    let default_level = LevelFilter::from_level(config.verbosity.default_level());
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&config, stdin.lock(), stdout.lock()).context("pstats failed")
}
