//! Core module - shared functionality across Appfetch
//!
//! Contains error types, configuration, and common data structures.

pub mod config;
pub mod error;
pub mod types;

pub use config::{BrowserConfig, Config, DownloadConfig, PollConfig};
pub use error::{AppfetchError, Result};
pub use types::{RunReport, Verdict};
