//! Custom error types for Appfetch
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for Appfetch operations
#[derive(Error, Debug)]
pub enum AppfetchError {
    /// Browser session construction failures (unrecoverable per invocation)
    #[error("failed to start browser session: {0}")]
    SessionInit(String),

    /// A page element could not be located
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// Browser interaction errors after the session is up
    #[error("browser error: {0}")]
    Browser(String),

    /// Filesystem access errors
    #[error("filesystem error: {0}")]
    Filesystem(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for Appfetch operations
pub type Result<T> = std::result::Result<T, AppfetchError>;

impl AppfetchError {
    /// Create a session construction error
    pub fn session_init(msg: impl Into<String>) -> Self {
        Self::SessionInit(msg.into())
    }

    /// Create an element-not-found error
    pub fn element_not_found(msg: impl Into<String>) -> Self {
        Self::ElementNotFound(msg.into())
    }

    /// Create a browser interaction error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a filesystem error
    pub fn filesystem(msg: impl Into<String>) -> Self {
        Self::Filesystem(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
