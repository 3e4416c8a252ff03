// scribe/src/main.rs
//! `scribe` entry point.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use scribe::cli::{Cli, Commands};
use scribe::commands::{emit, inspect, redact};
use scribe::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match &cli.command {
        Commands::Log(cmd) => emit::run_log_command(cmd),
        Commands::Redact(cmd) => redact::run_redact_command(cmd),
        Commands::Rules(cmd) => inspect::run_rules_command(cmd),
        Commands::Path(cmd) => inspect::run_path_command(cmd),
    }
}
