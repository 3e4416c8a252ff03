//! Where a `Scribe` sends each message besides the log file.

pub mod console;
pub mod live_tail;
pub mod structured;
