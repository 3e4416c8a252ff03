//! Log record types shared by the formatter, the file writer and the sinks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a single log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Debug,
    Warning,
    Error,
    Fault,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Info,
        Severity::Success,
        Severity::Debug,
        Severity::Warning,
        Severity::Error,
        Severity::Fault,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Debug => "debug",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fault => "fault",
        }
    }

    /// The `log` crate level this severity is emitted at.
    pub fn log_level(&self) -> log::Level {
        match self {
            Severity::Info | Severity::Success => log::Level::Info,
            Severity::Debug => log::Level::Debug,
            Severity::Warning => log::Level::Warn,
            Severity::Error | Severity::Fault => log::Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing an unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(pub String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown severity '{}'; expected one of: info, success, debug, warning, error, fault.",
            self.0
        )
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "debug" => Ok(Severity::Debug),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fault" => Ok(Severity::Fault),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// One log call, as seen by the formatter and the sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub module: String,
    pub category: String,
    pub severity: Severity,
    /// Already sanitized when the secret filter is on.
    pub message: String,
    /// Whether the rendered line ends with `\n`.
    pub terminate_line: bool,
}
