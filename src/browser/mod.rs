//! Browser session management
//!
//! Owns one automated Chromium instance bound to a download directory.

mod session;

pub use session::BrowserSession;
