//! Shared types used across Appfetch modules

use std::time::Duration;

/// Terminal outcome of one download run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Exactly one new completed file landed in the download directory
    Success,
    /// The deadline expired before a new file finished
    TimedOut,
    /// The run failed before or during the transfer
    Failed(String),
}

impl Verdict {
    /// Whether the run produced a completed download
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Success => write!(f, "Downloaded"),
            Verdict::TimedOut => write!(f, "Timed out downloading"),
            Verdict::Failed(reason) => write!(f, "Download failed: {}", reason),
        }
    }
}

/// Result of one orchestration run: verdict plus wall-clock time
#[derive(Debug, Clone)]
pub struct RunReport {
    /// How the run ended
    pub verdict: Verdict,
    /// Wall-clock time from run start to verdict
    pub elapsed: Duration,
}

impl RunReport {
    /// One-line human-readable outcome, printed and logged per run
    pub fn outcome_line(&self) -> String {
        format!("{} in {:.2}s", self.verdict, self.elapsed.as_secs_f64())
    }
}
