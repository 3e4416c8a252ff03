//! The structured log sink.
//!
//! Every facade call is forwarded here tagged with its subsystem (module),
//! category and severity. The facade also reports its own trouble here, such
//! as a log file that could not be written.

use scribe_core::Severity;

/// Receives every message a `Scribe` emits. Implementations must not panic.
pub trait StructuredSink: Send + Sync {
    fn emit(&self, subsystem: &str, category: &str, severity: Severity, message: &str);
}

/// Forwards to the `log` facade, with `"<subsystem>/<category>"` as the target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateSink;

impl StructuredSink for LogCrateSink {
    fn emit(&self, subsystem: &str, category: &str, severity: Severity, message: &str) {
        let target = format!("{}/{}", subsystem, category);
        log::log!(target: target.as_str(), severity.log_level(), "{}", message);
    }
}
