//! The `scribe log` command: one message through a freshly built logger.

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::debug;
use scribe_core::{RegexEngine, RuleSource, SanitizationEngine};

use crate::cli::LogCommand;
use crate::facade::{Scribe, ScribeOptions};
use crate::ui::theme::build_theme_map;

/// Midnight UTC of `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// The engine for an optional rule file; the shared packaged engine otherwise.
pub fn engine_for(rules: Option<&std::path::Path>) -> Arc<dyn SanitizationEngine> {
    match rules {
        Some(path) => Arc::new(RegexEngine::load(&RuleSource::File(path.to_path_buf()))),
        None => RegexEngine::shared_default(),
    }
}

pub fn run_log_command(cmd: &LogCommand) -> Result<()> {
    let theme = build_theme_map(cmd.theme.as_deref())?;

    let mut options = ScribeOptions {
        file_logging_enabled: cmd.file,
        secret_filter_enabled: !cmd.no_filter,
        log_root: cmd.log_root.clone(),
        console_color: cmd.no_color.then_some(false),
        engine: Some(engine_for(cmd.rules.as_deref())),
        theme,
        ..ScribeOptions::default()
    };
    if let Some(date) = cmd.date {
        options.file_date = start_of_day(date);
    }
    debug!("Logging with {:?}", options);

    let scribe = Scribe::with_options(&cmd.module, &cmd.category, options);
    scribe.log(cmd.level, &cmd.message, !cmd.no_newline);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_day_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(start_of_day(date).to_rfc3339(), "2024-02-29T00:00:00+00:00");
    }
}
