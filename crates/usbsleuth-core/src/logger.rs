/// Append-only activity log.
///
/// Every call opens the destination in append mode, writes one line, and
/// closes it again; no handle is held between events. The trimmed line is
/// mirrored to stdout whether or not the file write succeeded.
use crate::constants::TIMESTAMP_FORMAT;
use crate::{Result, UsbSleuthError};
use chrono::{DateTime, Local};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One activity log line before serialisation.
#[derive(Debug, Clone)]
pub struct LogLine<'a> {
    pub timestamp: Option<DateTime<Local>>,
    pub text: &'a str,
}

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timestamp {
            Some(ts) => write!(f, "[{}] {}", ts.format(TIMESTAMP_FORMAT), self.text),
            None => f.write_str(self.text),
        }
    }
}

/// Destination for activity records.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
    echo: bool,
}

impl EventLog {
    /// Log to `path`, mirroring each line to stdout.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            echo: true,
        }
    }

    /// Enable or disable the stdout mirror.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `text` as one line, prefixed with the local time when
    /// `include_timestamp` is set. Creates the file if it does not exist.
    pub fn log_event(&self, text: &str, include_timestamp: bool) -> Result<()> {
        let line = LogLine {
            timestamp: include_timestamp.then(Local::now),
            text,
        };
        let entry = format!("{line}\n");

        let written = self.append(&entry);
        if self.echo {
            println!("{}", entry.trim());
        }
        written
    }

    fn append(&self, entry: &str) -> Result<()> {
        let to_err = |source| UsbSleuthError::LogWrite {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_err)?;
        file.write_all(entry.as_bytes()).map_err(to_err)
    }
}
