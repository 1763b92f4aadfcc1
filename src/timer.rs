//! One-shot deadline timer
//!
//! Runs on its own tokio task so the polling loop can observe expiry without
//! driving time itself. The expired flag is only ever written by the timer
//! task and read by the loop, so an atomic is enough.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A fixed-interval, one-shot deadline signal
#[derive(Debug)]
pub struct DeadlineTimer {
    expired: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl DeadlineTimer {
    /// Start the deadline; the expired flag flips after `duration`
    pub fn start(duration: Duration) -> Self {
        let expired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&expired);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            flag.store(true, Ordering::Release);
        });
        Self {
            expired,
            handle: Some(handle),
        }
    }

    /// Lock-free read of the expiry flag
    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::Acquire)
    }

    /// Cancel the deadline; the flag keeps its current value
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for DeadlineTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
