//! The `scribe redact` command.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Read, Write};

use scribe_core::{headless_sanitize_string, RuleSource};

use crate::cli::RedactCommand;

pub fn run_redact_command(cmd: &RedactCommand) -> Result<()> {
    let input = match &cmd.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    let source = match &cmd.rules {
        Some(path) => RuleSource::File(path.clone()),
        None => RuleSource::Embedded,
    };
    let sanitized = headless_sanitize_string(&source, &input)?;
    info!(
        "Redacted input. Original length: {}, sanitized length: {}",
        input.len(),
        sanitized.len()
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(sanitized.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
