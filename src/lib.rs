//! Appfetch - Installer Download Automation
//!
//! Drives a headless Chromium session to trigger the download of a vendor
//! installer and watches the download directory until the file has fully
//! landed on disk (or the run times out).
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Targets**: Static registry of supported vendor download pages
//! - **Detect**: Filesystem census of completed vs in-progress downloads
//! - **Browser**: Chromium session lifecycle over the DevTools protocol
//! - **Timer**: One-shot deadline observed by the polling loop
//! - **Orchestrator**: Ties the above into a single download run
//!
//! # Usage
//!
//! ```rust,no_run
//! use appfetch::{Config, Orchestrator};
//! use appfetch::targets::TargetName;
//!
//! #[tokio::main]
//! async fn main() {
//!     let orchestrator = Orchestrator::new(Config::load());
//!     let report = orchestrator.run(TargetName::Vivaldi.target()).await.unwrap();
//!     println!("{}", report.outcome_line());
//! }
//! ```

pub mod browser;
pub mod core;
pub mod detect;
pub mod orchestrator;
pub mod runlog;
pub mod targets;
pub mod timer;

// Re-export commonly used items
pub use crate::core::{AppfetchError, Config, Result, RunReport, Verdict};
pub use crate::orchestrator::Orchestrator;
