//! Download orchestrator
//!
//! One generic routine drives every target: open a session, trigger the
//! transfer, then poll the download directory against the deadline. The
//! per-target differences live entirely in the static registry record.

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::browser::BrowserSession;
use crate::core::config::Config;
use crate::core::error::{AppfetchError, Result};
use crate::core::types::{RunReport, Verdict};
use crate::detect;
use crate::runlog::RunLog;
use crate::targets::DownloadTarget;
use crate::timer::DeadlineTimer;

/// Pause after accepting a cookie banner before locating the trigger
const CONSENT_SETTLE: Duration = Duration::from_secs(1);

/// Runs one download per invocation against a configured environment
pub struct Orchestrator {
    config: Config,
    runlog: RunLog,
}

impl Orchestrator {
    /// Orchestrator logging to the default `runtime.log`
    pub fn new(config: Config) -> Self {
        Self::with_runlog(config, RunLog::default())
    }

    /// Orchestrator with an explicit run log destination
    pub fn with_runlog(config: Config, runlog: RunLog) -> Self {
        Self { config, runlog }
    }

    /// Download the given target and report the verdict with elapsed time.
    ///
    /// Only session construction failures surface as `Err`; every other
    /// failure is folded into `Verdict::Failed`. The browser session is
    /// closed on every exit path.
    pub async fn run(&self, target: &DownloadTarget) -> Result<RunReport> {
        let started = Instant::now();
        let download_dir = self.config.download_dir();

        let baseline = detect::census(&download_dir).completed;
        debug!(
            "baseline for {}: {} completed files in {:?}",
            target.name, baseline, download_dir
        );

        let session = BrowserSession::open(&self.config.browser, &download_dir).await?;

        let verdict = match self.drive(&session, target, &download_dir, baseline).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!("{} run failed: {}", target.name, e);
                Verdict::Failed(e.to_string())
            }
        };
        session.close().await;

        let report = RunReport {
            verdict,
            elapsed: started.elapsed(),
        };
        info!("{}: {}", target.name, report.outcome_line());
        self.runlog
            .append(&format!("{}: {}", target.name, report.outcome_line()));
        Ok(report)
    }

    /// Trigger the transfer and wait for it; the caller owns session teardown
    async fn drive(
        &self,
        session: &BrowserSession,
        target: &DownloadTarget,
        download_dir: &Path,
        baseline: usize,
    ) -> Result<Verdict> {
        session.navigate(target.page_url).await?;

        // The consent banner may legitimately be absent.
        if let Some(consent) = target.cookie_consent_selector {
            match session.click(consent).await {
                Ok(()) => tokio::time::sleep(CONSENT_SETTLE).await,
                Err(e) => debug!("no cookie consent banner: {}", e),
            }
        }

        match session.click(target.trigger_selector).await {
            Ok(()) => {}
            Err(AppfetchError::ElementNotFound(selector)) => {
                return Ok(Verdict::Failed(format!("trigger not found: {}", selector)));
            }
            Err(e) => return Err(e),
        }

        let mut timer = DeadlineTimer::start(Duration::from_millis(self.config.poll.timeout_ms));
        let interval = Duration::from_millis(self.config.poll.interval_ms);

        if poll_until_complete(download_dir, baseline, &timer, interval).await {
            timer.stop();
            Ok(Verdict::Success)
        } else {
            // Any exit without an observed completion resolves to a timeout.
            Ok(Verdict::TimedOut)
        }
    }
}

/// Sample the directory at a bounded interval until the completion predicate
/// holds or the deadline expires. Returns whether completion was observed.
async fn poll_until_complete(
    dir: &Path,
    baseline: usize,
    timer: &DeadlineTimer,
    interval: Duration,
) -> bool {
    loop {
        if detect::is_complete(dir, baseline) {
            return true;
        }
        if timer.is_expired() {
            return false;
        }
        tokio::time::sleep(interval).await;
    }
}
