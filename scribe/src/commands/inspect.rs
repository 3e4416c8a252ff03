//! The `scribe rules` and `scribe path` commands.

use anyhow::{anyhow, Result};
use chrono::Utc;
use scribe_core::{LoadStatus, LogFile, RegexEngine, RuleSource};

use crate::cli::{PathCommand, RulesCommand};
use crate::commands::emit::start_of_day;

/// Prints rule names in evaluation order on stdout and the load status on stderr.
pub fn run_rules_command(cmd: &RulesCommand) -> Result<()> {
    let source = match &cmd.rules {
        Some(path) => RuleSource::File(path.clone()),
        None => RuleSource::Embedded,
    };
    let engine = RegexEngine::load(&source);

    match engine.load_status() {
        LoadStatus::Unavailable(e) => return Err(anyhow!("{}", e)),
        LoadStatus::Partial { dropped } => {
            for e in dropped {
                eprintln!("dropped: {}", e);
            }
        }
        LoadStatus::Complete => {}
    }

    for name in engine.rule_names() {
        println!("{}", name);
    }
    eprintln!("{} rules loaded from {}", engine.rule_names().len(), source.source_name());
    Ok(())
}

pub fn run_path_command(cmd: &PathCommand) -> Result<()> {
    let file_date = cmd.date.map(start_of_day).unwrap_or_else(Utc::now);
    let log_file = match &cmd.log_root {
        Some(root) => LogFile::for_date(root, &file_date),
        None => LogFile::in_home(&file_date)?,
    };
    println!("{}", log_file.path().display());
    Ok(())
}
