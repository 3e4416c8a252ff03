//! Line formatting for the shared log file.
//!
//! The rendered bytes are what ends up on disk, so the formats here are fixed:
//! `[1970-01-01T00:00:01.000] [module/category] message\n`.

use chrono::{DateTime, Utc};

use crate::record::LogRecord;

/// ISO-8601 in UTC with millisecond precision and no zone suffix.
const LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";
/// Day granularity, used as the log file name.
const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(LINE_TIMESTAMP_FORMAT).to_string()
}

pub fn format_file_date(file_date: &DateTime<Utc>) -> String {
    file_date.format(FILE_DATE_FORMAT).to_string()
}

/// Renders `record` as the exact text appended to the log file.
///
/// The newline is only added when the record terminates its line, which lets
/// a caller build one visual line out of several calls.
pub fn format_line(record: &LogRecord) -> String {
    let mut line = format!(
        "[{}] [{}/{}] {}",
        format_timestamp(&record.timestamp),
        record.module,
        record.category,
        record.message
    );
    if record.terminate_line {
        line.push('\n');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Severity;
    use chrono::TimeZone;

    fn record(message: &str, terminate_line: bool) -> LogRecord {
        LogRecord {
            timestamp: Utc.timestamp_opt(1, 0).unwrap(),
            module: "m".to_string(),
            category: "c".to_string(),
            severity: Severity::Error,
            message: message.to_string(),
            terminate_line,
        }
    }

    #[test]
    fn timestamp_has_millisecond_precision() {
        assert_eq!(format_timestamp(&Utc.timestamp_opt(1, 0).unwrap()), "1970-01-01T00:00:01.000");
        let precise = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(format_timestamp(&precise), "2023-11-14T22:13:20.123");
    }

    #[test]
    fn sub_millisecond_digits_are_truncated() {
        let t = Utc.timestamp_opt(0, 999_999).unwrap();
        assert_eq!(format_timestamp(&t), "1970-01-01T00:00:00.000");
    }

    #[test]
    fn file_date_is_day_granular() {
        assert_eq!(format_file_date(&Utc.timestamp_opt(1, 0).unwrap()), "1970-01-01");
        assert_eq!(format_file_date(&Utc.timestamp_opt(86_399, 0).unwrap()), "1970-01-01");
        assert_eq!(format_file_date(&Utc.timestamp_opt(86_400, 0).unwrap()), "1970-01-02");
    }

    #[test]
    fn line_ends_with_newline_only_when_terminated() {
        assert_eq!(format_line(&record("X", true)), "[1970-01-01T00:00:01.000] [m/c] X\n");
        assert_eq!(format_line(&record("X", false)), "[1970-01-01T00:00:01.000] [m/c] X");
    }

    #[test]
    fn multi_line_message_keeps_single_prefix() {
        assert_eq!(
            format_line(&record("a\nb", true)),
            "[1970-01-01T00:00:01.000] [m/c] a\nb\n"
        );
    }
}
