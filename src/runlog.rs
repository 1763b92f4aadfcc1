//! Append-only run log
//!
//! Writes one `<timestamp> -> <message>` line per event to `runtime.log` in
//! the process working directory. Logging must never take a run down: every
//! failure here degrades to a tracing warning.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use tracing::warn;

const CREATE_ATTEMPTS: usize = 3;

/// Appender for the flat run log
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new("runtime.log")
    }
}

impl RunLog {
    /// Log writing to the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one timestamped line, creating the file on first write
    pub fn append(&self, message: &str) {
        let line = format!(
            "{} -> {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            message
        );

        if !self.path.exists() && !self.create_with_retries() {
            warn!("unable to create run log at {:?}, dropping entry", self.path);
            return;
        }

        let result = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = result {
            warn!("unable to append to run log at {:?}: {}", self.path, e);
        }
    }

    fn create_with_retries(&self) -> bool {
        for attempt in 1..=CREATE_ATTEMPTS {
            match File::create(&self.path) {
                Ok(_) => return true,
                Err(e) => warn!(
                    "run log creation attempt {}/{} failed: {}",
                    attempt, CREATE_ATTEMPTS, e
                ),
            }
        }
        false
    }
}
