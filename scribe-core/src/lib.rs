// scribe-core/src/lib.rs
//! # Scribe Core Library
//!
//! `scribe-core` holds the parts of scribe that carry real invariants: the
//! secret-redaction pipeline and the append-safe daily log file. The logger
//! facade and its sinks live in the `scribe` crate and build on these.
//!
//! ## Modules
//!
//! * `config`: Rule sources (`RuleSource`) and the descending-name ordering policy.
//! * `sanitizers`: Compiles a rule source into an ordered `CompiledRules` set with a `LoadStatus`.
//! * `engine`: The `SanitizationEngine` trait and the `[REDACTED]` placeholder.
//! * `engines`: The regex-backed `RegexEngine`.
//! * `record`: `Severity` and `LogRecord`.
//! * `format`: Timestamp, file date and line rendering.
//! * `log_file`: The shared, reopen-per-append day file.
//! * `headless`: One-shot redaction of a string.
//! * `errors`: The `ScribeError` taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use scribe_core::{RegexEngine, RuleSource, SanitizationEngine};
//!
//! let engine = RegexEngine::load(&RuleSource::Embedded);
//! assert!(!engine.is_degraded());
//! assert_eq!(
//!     engine.sanitize("Gitlab token: glpat-1239908108359_jnlk"),
//!     "Gitlab token: [REDACTED]"
//! );
//! ```
//!
//! ## Error Handling
//!
//! Nothing here panics on bad input. Loading rules never fails (see
//! [`LoadStatus`]); file operations return [`ScribeError`] for the caller to
//! report and move on.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod format;
pub mod headless;
pub mod log_file;
pub mod record;
pub mod sanitizers;

pub use config::{order_rules, RedactionRule, RuleSource, MAX_PATTERN_LENGTH};

pub use errors::ScribeError;

pub use engine::{SanitizationEngine, REDACTION_PLACEHOLDER};

pub use engines::regex_engine::RegexEngine;

pub use sanitizers::compiler::{
    compile_rules, load_rules, CompiledRule, CompiledRules, LoadStatus, RuleSetLoad,
};

pub use record::{LogRecord, ParseSeverityError, Severity};

pub use format::{format_file_date, format_line, format_timestamp};

pub use log_file::{LogFile, LOG_DIR_NAME};

pub use headless::headless_sanitize_string;
