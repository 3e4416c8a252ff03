//! Console output: the bare message, coloured by severity.
//!
//! Unlike the file line, console output carries no timestamp or
//! `module/category` prefix.

use std::io::{self, Write};

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use scribe_core::LogRecord;

use crate::ui::theme::{color_for, ThemeMap};

#[derive(Debug, Clone)]
pub struct ConsoleSink {
    theme: ThemeMap,
    colorize: bool,
}

impl ConsoleSink {
    /// Colours output only when stdout is a terminal.
    pub fn new(theme: ThemeMap) -> Self {
        let colorize = io::stdout().is_terminal();
        Self { theme, colorize }
    }

    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// The exact text written for `record`.
    pub fn render(&self, record: &LogRecord) -> String {
        let mut rendered = match color_for(&self.theme, record.severity) {
            Some(color) if self.colorize => record.message.color(color).to_string(),
            _ => record.message.clone(),
        };
        if record.terminate_line {
            rendered.push('\n');
        }
        rendered
    }

    /// Writes `record` to stdout. A closed or broken stdout is ignored.
    pub fn emit(&self, record: &LogRecord) {
        let rendered = self.render(record);
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(rendered.as_bytes());
        let _ = stdout.flush();
    }
}
