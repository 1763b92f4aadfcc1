//! Configuration management for Appfetch
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/appfetch/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{AppfetchError, Result};

/// Main configuration for Appfetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Browser configuration
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Download directory configuration
    #[serde(default)]
    pub download: DownloadConfig,
    /// Polling configuration
    #[serde(default)]
    pub poll: PollConfig,
}

/// Browser session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Whether to run Chromium headlessly
    pub headless: bool,
    /// Explicit Chromium executable; when unset a system install is searched
    pub chrome_executable: Option<PathBuf>,
    /// Upper bound for page-load operations in seconds
    pub page_load_timeout_secs: u64,
}

/// Download directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Override for the download directory; when unset downloads land in
    /// `applications/` next to the executable
    pub dir: Option<PathBuf>,
}

/// Completion polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Pause between directory samples in milliseconds
    pub interval_ms: u64,
    /// Deadline for the whole transfer in milliseconds
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser: BrowserConfig::default(),
            download: DownloadConfig::default(),
            poll: PollConfig::default(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: !env::var("APPFETCH_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            chrome_executable: env::var("APPFETCH_CHROME").ok().map(PathBuf::from),
            page_load_timeout_secs: 300,
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            dir: env::var("APPFETCH_DOWNLOAD_DIR").ok().map(PathBuf::from),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            timeout_ms: 120_000,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("appfetch")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(AppfetchError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| AppfetchError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppfetchError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Resolve the download directory for this process.
    ///
    /// Defaults to `applications/` next to the executable; falls back to
    /// `applications/` under the home directory when the executable path
    /// cannot be determined. The directory is created lazily by the
    /// completion detector, not here.
    pub fn download_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.download.dir {
            return dir.clone();
        }

        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.join("applications")))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("applications")
            })
    }
}
