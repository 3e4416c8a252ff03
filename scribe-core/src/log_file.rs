//! The shared daily log file.
//!
//! Every logger that targets the same day writes to the same file:
//! `<root>/.scribe-logs/<YYYY-MM-DD>`. Nobody keeps the file open. Each append
//! opens it in append mode, writes one record with a single `write_all` and
//! closes it again. On append-mode files the kernel moves to the end and
//! writes as one step, so concurrent appends from any number of loggers land
//! as whole records without an in-process lock. Records from different
//! loggers appear in whatever order their writes happen to reach the file.
//!
//! Very large records may be split into several writes by the OS and are not
//! covered by that guarantee. For those, and for file systems without atomic
//! append, [`LogFile::with_lock`] takes an exclusive advisory lock around each
//! write.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use log::debug;

use crate::errors::ScribeError;
use crate::format::format_file_date;

/// Directory under the root (normally the home directory) holding the day files.
pub const LOG_DIR_NAME: &str = ".scribe-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    path: PathBuf,
    lock: bool,
}

impl LogFile {
    /// The day file for `file_date` under `root`.
    pub fn for_date(root: &Path, file_date: &DateTime<Utc>) -> Self {
        Self {
            path: root.join(LOG_DIR_NAME).join(format_file_date(file_date)),
            lock: false,
        }
    }

    /// The day file for `file_date` under the current user's home directory.
    pub fn in_home(file_date: &DateTime<Utc>) -> Result<Self, ScribeError> {
        let home = dirs::home_dir().ok_or(ScribeError::HomeDirUnavailable)?;
        Ok(Self::for_date(&home, file_date))
    }

    /// Takes an exclusive file lock around every append when `lock` is set.
    pub fn with_lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the directory and an empty file if they are missing.
    ///
    /// Existing directories and files are left alone; in particular an existing
    /// file is never truncated. Safe to race with other loggers doing the same.
    pub fn ensure_exists(&self) -> Result<(), ScribeError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ScribeError::FileCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| ScribeError::FileCreate {
                path: self.path.clone(),
                source,
            })?;

        debug!("Log file ready at {}", self.path.display());
        Ok(())
    }

    /// Appends `text` to the end of the file.
    ///
    /// The file is created if it vanished since construction, but its
    /// directory is not.
    pub fn append(&self, text: &str) -> Result<(), ScribeError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| ScribeError::FileOpen {
                path: self.path.clone(),
                source,
            })?;

        if self.lock {
            FileExt::lock_exclusive(&file).map_err(|source| ScribeError::FileOpen {
                path: self.path.clone(),
                source,
            })?;
        }

        let written = file.write_all(text.as_bytes());

        if self.lock {
            // Closing the handle releases the lock as well.
            let _ = FileExt::unlock(&file);
        }

        written.map_err(|source| ScribeError::FileWrite {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn epoch_plus_one() -> DateTime<Utc> {
        Utc.timestamp_opt(1, 0).unwrap()
    }

    #[test]
    fn path_depends_only_on_root_and_day() {
        let root = Path::new("/home/someone");
        let a = LogFile::for_date(root, &Utc.timestamp_opt(1, 0).unwrap());
        let b = LogFile::for_date(root, &Utc.timestamp_opt(3_600, 0).unwrap());
        assert_eq!(a.path(), Path::new("/home/someone/.scribe-logs/1970-01-01"));
        assert_eq!(a, b);
    }

    #[test]
    fn ensure_exists_creates_directory_and_empty_file() {
        let dir = tempdir().unwrap();
        let log = LogFile::for_date(dir.path(), &epoch_plus_one());
        log.ensure_exists().unwrap();
        assert!(log.path().is_file());
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "");
    }

    #[test]
    fn ensure_exists_is_idempotent_and_keeps_content() {
        let dir = tempdir().unwrap();
        let log = LogFile::for_date(dir.path(), &epoch_plus_one());
        log.ensure_exists().unwrap();
        log.append("kept\n").unwrap();
        log.ensure_exists().unwrap();
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "kept\n");
    }

    #[test]
    fn appends_accumulate_in_call_order() {
        let dir = tempdir().unwrap();
        let log = LogFile::for_date(dir.path(), &epoch_plus_one());
        log.ensure_exists().unwrap();
        log.append("one").unwrap();
        log.append(" two\n").unwrap();
        log.append("three\n").unwrap();
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "one two\nthree\n");
    }

    #[test]
    fn locked_append_writes_the_same_bytes() {
        let dir = tempdir().unwrap();
        let log = LogFile::for_date(dir.path(), &epoch_plus_one()).with_lock(true);
        log.ensure_exists().unwrap();
        log.append("locked\n").unwrap();
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "locked\n");
    }

    #[test]
    fn append_without_directory_is_an_open_error() {
        let dir = tempdir().unwrap();
        let log = LogFile::for_date(&dir.path().join("missing"), &epoch_plus_one());
        let err = log.append("lost\n").unwrap_err();
        assert!(matches!(err, ScribeError::FileOpen { .. }));
    }

    #[test]
    fn ensure_exists_reports_create_errors() {
        let dir = tempdir().unwrap();
        // A regular file where the log directory should be.
        let blocker = dir.path().join(LOG_DIR_NAME);
        fs::write(&blocker, "not a directory").unwrap();
        let log = LogFile::for_date(dir.path(), &epoch_plus_one());
        assert!(matches!(log.ensure_exists(), Err(ScribeError::FileCreate { .. })));
    }
}
