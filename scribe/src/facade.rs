//! The logger facade.
//!
//! A [`Scribe`] belongs to one subsystem (`module`) and one unit of logic
//! inside it (`category`). Each call runs, in order:
//!
//! 1. secret redaction, unless disabled;
//! 2. the live tail;
//! 3. the console;
//! 4. the structured sink, tagged `module/category` and severity;
//! 5. the day file, when file logging is on.
//!
//! Logging never fails from the caller's point of view. Problems with the log
//! file are reported as warnings on the structured sink and the call returns.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use scribe_core::{format_line, LogFile, LogRecord, RegexEngine, SanitizationEngine, Severity};
use tokio::sync::broadcast;

use crate::sinks::console::ConsoleSink;
use crate::sinks::live_tail::LiveTail;
use crate::sinks::structured::{LogCrateSink, StructuredSink};
use crate::ui::theme::{ThemeMap, ThemeStyle};

/// Produces the timestamp of each line. Called once per log call.
pub type LineClock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// A clock that always reports `at`.
pub fn fixed_clock(at: DateTime<Utc>) -> LineClock {
    Arc::new(move || at)
}

/// Construction options for a [`Scribe`].
pub struct ScribeOptions {
    /// Append every line to the shared day file.
    pub file_logging_enabled: bool,
    /// Redact secrets before the message reaches any sink.
    pub secret_filter_enabled: bool,
    /// Picks the day file. Fixed for the lifetime of the instance.
    pub file_date: DateTime<Utc>,
    /// Timestamps each line.
    pub line_clock: LineClock,
    /// Directory holding `.scribe-logs`; the home directory when `None`.
    pub log_root: Option<PathBuf>,
    pub console_enabled: bool,
    /// Force console colour on or off; detected from stdout when `None`.
    pub console_color: Option<bool>,
    /// Hold an exclusive file lock around each append.
    pub lock_appends: bool,
    /// The process-wide default engine when `None`.
    pub engine: Option<Arc<dyn SanitizationEngine>>,
    /// [`LogCrateSink`] when `None`.
    pub structured_sink: Option<Arc<dyn StructuredSink>>,
    pub theme: ThemeMap,
}

impl Default for ScribeOptions {
    fn default() -> Self {
        Self {
            file_logging_enabled: false,
            secret_filter_enabled: true,
            file_date: Utc::now(),
            line_clock: Arc::new(Utc::now),
            log_root: None,
            console_enabled: true,
            console_color: None,
            lock_appends: false,
            engine: None,
            structured_sink: None,
            theme: ThemeStyle::default_theme_map(),
        }
    }
}

impl fmt::Debug for ScribeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScribeOptions")
            .field("file_logging_enabled", &self.file_logging_enabled)
            .field("secret_filter_enabled", &self.secret_filter_enabled)
            .field("file_date", &self.file_date)
            .field("log_root", &self.log_root)
            .field("console_enabled", &self.console_enabled)
            .field("console_color", &self.console_color)
            .field("lock_appends", &self.lock_appends)
            .field("custom_engine", &self.engine.is_some())
            .field("custom_structured_sink", &self.structured_sink.is_some())
            .finish_non_exhaustive()
    }
}

pub struct Scribe {
    module: String,
    category: String,
    secret_filter_enabled: bool,
    line_clock: LineClock,
    engine: Arc<dyn SanitizationEngine>,
    structured: Arc<dyn StructuredSink>,
    console: Option<ConsoleSink>,
    live_tail: LiveTail,
    log_file: Option<LogFile>,
}

impl Scribe {
    /// A console-only logger with secret filtering on.
    pub fn new(module: impl Into<String>, category: impl Into<String>) -> Self {
        Self::with_options(module, category, ScribeOptions::default())
    }

    pub fn with_options(
        module: impl Into<String>,
        category: impl Into<String>,
        options: ScribeOptions,
    ) -> Self {
        let module = module.into();
        let category = category.into();

        let engine: Arc<dyn SanitizationEngine> = match options.engine {
            Some(engine) => engine,
            None => RegexEngine::shared_default(),
        };
        let structured: Arc<dyn StructuredSink> = match options.structured_sink {
            Some(sink) => sink,
            None => Arc::new(LogCrateSink),
        };

        let console = options.console_enabled.then(|| {
            let sink = ConsoleSink::new(options.theme);
            match options.console_color {
                Some(colorize) => sink.with_color(colorize),
                None => sink,
            }
        });

        let log_file = if options.file_logging_enabled {
            prepare_log_file(
                &module,
                &category,
                options.log_root.as_deref(),
                &options.file_date,
                options.lock_appends,
                structured.as_ref(),
            )
        } else {
            None
        };

        Self {
            module,
            category,
            secret_filter_enabled: options.secret_filter_enabled,
            line_clock: options.line_clock,
            engine,
            structured,
            console,
            live_tail: LiveTail::new(),
            log_file,
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The day file this instance appends to, when file logging is active.
    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file.as_ref().map(LogFile::path)
    }

    pub fn is_secret_filter_enabled(&self) -> bool {
        self.secret_filter_enabled
    }

    /// Receives every message this instance emits from now on, after redaction.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.live_tail.subscribe()
    }

    /// Logs `message` at `severity`.
    ///
    /// With `terminate_line` unset the file and console output get no trailing
    /// newline, so the next call continues the same visual line.
    pub fn log(&self, severity: Severity, message: &str, terminate_line: bool) {
        let message = if self.secret_filter_enabled {
            self.engine.sanitize(message)
        } else {
            message.to_string()
        };

        self.live_tail.publish(&message);

        let record = LogRecord {
            timestamp: (self.line_clock)(),
            module: self.module.clone(),
            category: self.category.clone(),
            severity,
            message,
            terminate_line,
        };

        if let Some(console) = &self.console {
            console.emit(&record);
        }

        self.structured
            .emit(&self.module, &self.category, severity, &record.message);

        if let Some(log_file) = &self.log_file {
            if let Err(e) = log_file.append(&format_line(&record)) {
                self.warn(&format!(
                    "Can't write the log line for {}/{}: {}",
                    self.module, self.category, e
                ));
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Severity::Info, message.as_ref(), true);
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.log(Severity::Success, message.as_ref(), true);
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Severity::Debug, message.as_ref(), true);
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(Severity::Warning, message.as_ref(), true);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Severity::Error, message.as_ref(), true);
    }

    pub fn fault(&self, message: impl AsRef<str>) {
        self.log(Severity::Fault, message.as_ref(), true);
    }

    /// Logs a readable description of `err` at error severity.
    pub fn error_from<E: std::error::Error + ?Sized>(&self, err: &E) {
        self.error(describe_error(err));
    }

    fn warn(&self, message: &str) {
        self.structured
            .emit(&self.module, &self.category, Severity::Warning, message);
    }
}

/// The error's message followed by any causes it does not already mention,
/// joined with `": "`. Falls back to `Debug` when the message is empty.
pub fn describe_error<E: std::error::Error + ?Sized>(err: &E) -> String {
    let mut description = err.to_string();
    if description.trim().is_empty() {
        description = format!("{:?}", err);
    }

    let mut cause = err.source();
    while let Some(current) = cause {
        let text = current.to_string();
        if !text.is_empty() && !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        cause = current.source();
    }
    description
}

/// Resolves and creates the day file. `None` disables file logging for the
/// instance, which only happens when no path can be resolved at all.
fn prepare_log_file(
    module: &str,
    category: &str,
    log_root: Option<&Path>,
    file_date: &DateTime<Utc>,
    lock_appends: bool,
    structured: &dyn StructuredSink,
) -> Option<LogFile> {
    let log_file = match log_root {
        Some(root) => LogFile::for_date(root, file_date),
        None => match LogFile::in_home(file_date) {
            Ok(log_file) => log_file,
            Err(e) => {
                structured.emit(
                    module,
                    category,
                    Severity::Warning,
                    &format!("File logging disabled for {}/{}: {}", module, category, e),
                );
                return None;
            }
        },
    }
    .with_lock(lock_appends);

    structured.emit(
        module,
        category,
        Severity::Info,
        &format!(
            "File logging is enabled. Find your logs at: {}",
            log_file.path().display()
        ),
    );

    if let Err(e) = log_file.ensure_exists() {
        structured.emit(
            module,
            category,
            Severity::Warning,
            &format!("Can't create a log file for {}/{}: {}", module, category, e),
        );
    }

    Some(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Outer {
        inner: io::Error,
    }

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("loading profile failed")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.inner)
        }
    }

    #[derive(Debug)]
    struct Silent;

    impl fmt::Display for Silent {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    impl std::error::Error for Silent {}

    #[test]
    fn description_includes_cause_chain() {
        let err = Outer {
            inner: io::Error::new(io::ErrorKind::NotFound, "profile.yaml missing"),
        };
        assert_eq!(describe_error(&err), "loading profile failed: profile.yaml missing");
    }

    #[test]
    fn description_does_not_repeat_embedded_cause() {
        let err = scribe_core::ScribeError::FileOpen {
            path: PathBuf::from("/tmp/x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(describe_error(&err), "Failed to open log file /tmp/x: denied");
    }

    #[test]
    fn empty_message_falls_back_to_debug() {
        assert_eq!(describe_error(&Silent), "Silent");
    }

    #[test]
    fn options_default_to_filtering_without_file() {
        let options = ScribeOptions::default();
        assert!(!options.file_logging_enabled);
        assert!(options.secret_filter_enabled);
        assert!(options.engine.is_none());
    }
}
