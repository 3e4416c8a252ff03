//! errors.rs - Custom error types for the scribe-core library.
//!
//! None of these errors ever escapes a logging call. The rule store turns them
//! into a degraded [`LoadStatus`](crate::sanitizers::compiler::LoadStatus) and
//! the facade turns file errors into warnings on its structured sink. They are
//! still typed so callers and tests can see exactly what went wrong.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `scribe-core` library.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScribeError {
    #[error("Failed to load redaction rules from {source_name}: {reason}")]
    RuleLoad { source_name: String, reason: String },

    #[error("Failed to compile redaction rule '{0}': {1}")]
    RuleCompilation(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Could not resolve the home directory for the log file")]
    HomeDirUnavailable,

    #[error("Failed to create log file {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to log file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScribeError {
    /// Name of the rule this error concerns, for per-rule compile failures.
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            ScribeError::RuleCompilation(name, _) | ScribeError::PatternLengthExceeded(name, _, _) => {
                Some(name)
            }
            _ => None,
        }
    }
}
