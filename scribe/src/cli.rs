// scribe/src/cli.rs
//! Command-line interface of the `scribe` binary.
//! License: MIT OR Apache-2.0

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use scribe_core::Severity;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "scribe",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log through scribe, or redact secrets from text",
    long_about = "scribe writes messages through the secret-redacting logger, optionally appending them to the shared daily log file under ~/.scribe-logs, and exposes the redaction rules on their own.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all internal logging.
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging, overriding RUST_LOG.
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emits one message through a logger.
    Log(LogCommand),

    /// Redacts secrets from a file or stdin and prints the result.
    Redact(RedactCommand),

    /// Lists the loaded redaction rules in evaluation order.
    Rules(RulesCommand),

    /// Prints the path of the day file for a date.
    Path(PathCommand),
}

/// Arguments for the `log` command.
#[derive(Parser, Debug)]
pub struct LogCommand {
    /// The message to log.
    pub message: String,

    /// Subsystem the message belongs to.
    #[arg(long, short = 'm', default_value = "scribe")]
    pub module: String,

    /// Unit of logic inside the subsystem.
    #[arg(long, short = 'c', default_value = "cli")]
    pub category: String,

    /// Severity: info, success, debug, warning, error or fault.
    #[arg(long, short = 'l', default_value = "info")]
    pub level: Severity,

    /// Also append the message to the daily log file.
    #[arg(long, short = 'f')]
    pub file: bool,

    /// Do not redact secrets.
    #[arg(long = "no-filter")]
    pub no_filter: bool,

    /// Do not end the line, so the next message continues it.
    #[arg(long = "no-newline", short = 'n')]
    pub no_newline: bool,

    /// Day file to write to (YYYY-MM-DD, UTC). Defaults to today.
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Directory holding `.scribe-logs` instead of the home directory.
    #[arg(long = "log-root", value_name = "DIR", env = "SCRIBE_LOG_ROOT")]
    pub log_root: Option<PathBuf>,

    /// Rule file (JSON, or YAML by extension) instead of the packaged rules.
    #[arg(long, value_name = "FILE", env = "SCRIBE_RULES")]
    pub rules: Option<PathBuf>,

    /// YAML console theme.
    #[arg(long, value_name = "FILE", env = "SCRIBE_THEME")]
    pub theme: Option<PathBuf>,

    /// Never colour console output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// Arguments for the `redact` command.
#[derive(Parser, Debug)]
pub struct RedactCommand {
    /// Read from this file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Rule file (JSON, or YAML by extension) instead of the packaged rules.
    #[arg(long, value_name = "FILE", env = "SCRIBE_RULES")]
    pub rules: Option<PathBuf>,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesCommand {
    /// Rule file (JSON, or YAML by extension) instead of the packaged rules.
    #[arg(long, value_name = "FILE", env = "SCRIBE_RULES")]
    pub rules: Option<PathBuf>,
}

/// Arguments for the `path` command.
#[derive(Parser, Debug)]
pub struct PathCommand {
    /// Day to resolve (YYYY-MM-DD, UTC). Defaults to today.
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Directory holding `.scribe-logs` instead of the home directory.
    #[arg(long = "log-root", value_name = "DIR", env = "SCRIBE_LOG_ROOT")]
    pub log_root: Option<PathBuf>,
}
