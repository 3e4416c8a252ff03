// scribe/src/lib.rs
//! # scribe
//!
//! A logger that redacts secrets before anything leaves the process and
//! appends tagged lines to a daily log file shared by every logger in it.
//!
//! ```no_run
//! use scribe::{Scribe, ScribeOptions};
//!
//! let scribe = Scribe::with_options(
//!     "billing",
//!     "InvoiceSync",
//!     ScribeOptions { file_logging_enabled: true, ..ScribeOptions::default() },
//! );
//! scribe.info("sync started");
//! scribe.error("token glpat-1239908108359_jnlk rejected"); // written as "token [REDACTED] rejected"
//! ```
//!
//! There is no global logger. Build a `Scribe` per subsystem where the
//! application is assembled and hand it to the code that needs it.

pub mod cli;
pub mod commands;
pub mod facade;
pub mod logger;
pub mod sinks;
pub mod ui;

pub use facade::{describe_error, fixed_clock, LineClock, Scribe, ScribeOptions};
pub use sinks::live_tail::{LiveTail, LIVE_TAIL_CAPACITY};
pub use sinks::structured::{LogCrateSink, StructuredSink};

pub use scribe_core::{LogRecord, RegexEngine, RuleSource, SanitizationEngine, Severity};
