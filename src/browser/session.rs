//! Chromium session lifecycle over the DevTools protocol
//!
//! One session per download run: launched headless, configured to save
//! downloads silently into the download directory, torn down on every exit
//! path. `close` consumes the session, so a double close cannot be written.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::browser::{
    SetDownloadBehaviorBehavior, SetDownloadBehaviorParams,
};
use chromiumoxide::{Browser, BrowserConfig as ChromeConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use which::which;

use crate::core::config::BrowserConfig;
use crate::core::error::{AppfetchError, Result};

/// One live automated browser bound to a download directory
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch Chromium and configure silent downloads into `download_dir`.
    ///
    /// Any failure here is unrecoverable for the invocation; the caller is
    /// expected to report it and terminate.
    pub async fn open(config: &BrowserConfig, download_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(download_dir).map_err(|e| {
            AppfetchError::session_init(format!(
                "cannot create download directory {:?}: {}",
                download_dir, e
            ))
        })?;

        let chrome_config = build_chrome_config(config)?;

        let (browser, mut handler) = Browser::launch(chrome_config)
            .await
            .map_err(|e| AppfetchError::session_init(e.to_string()))?;

        // The handler drives all CDP traffic; it must run for the lifetime
        // of the browser.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
            debug!("browser handler task ended");
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| AppfetchError::session_init(e.to_string()))?;

        // Route downloads into the target directory without a save-as prompt.
        let download_path = download_dir.to_string_lossy().to_string();
        page.execute(SetDownloadBehaviorParams {
            behavior: SetDownloadBehaviorBehavior::Allow,
            download_path: Some(download_path),
            browser_context_id: None,
            events_enabled: None,
        })
        .await
        .map_err(|e| AppfetchError::session_init(e.to_string()))?;

        info!("browser session open, downloads into {:?}", download_dir);

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    /// Navigate the session's page to `url` and wait for the load to settle
    pub async fn navigate(&self, url: &str) -> Result<()> {
        self.page
            .goto(url)
            .await
            .map_err(|e| AppfetchError::browser(format!("navigation to {} failed: {}", url, e)))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| AppfetchError::browser(format!("page load of {} failed: {}", url, e)))?;
        Ok(())
    }

    /// Click the element matching `selector`
    pub async fn click(&self, selector: &str) -> Result<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| AppfetchError::element_not_found(selector.to_string()))?;

        element
            .click()
            .await
            .map_err(|e| AppfetchError::browser(format!("click on {} failed: {}", selector, e)))?;
        Ok(())
    }

    /// Tear down the browser and its spawned worker process.
    ///
    /// Consumes the session; every exit path of a run must end here.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("browser close failed: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("waiting for browser process exit failed: {}", e);
        }
        // Handler ends once the browser is gone; don't hang on it.
        let _ = tokio::time::timeout(Duration::from_secs(2), self.handler_task).await;
        info!("browser session closed");
    }
}

fn build_chrome_config(config: &BrowserConfig) -> Result<ChromeConfig> {
    let mut builder = ChromeConfig::builder()
        .request_timeout(Duration::from_secs(config.page_load_timeout_secs))
        .arg("--no-sandbox")
        .arg("--disable-dev-shm-usage")
        .arg("--disable-extensions")
        .arg("--disable-notifications")
        .arg("--log-level=3")
        .arg("--window-size=1920,1080");

    if !config.headless {
        builder = builder.with_head();
    }

    let executable = config
        .chrome_executable
        .clone()
        .or_else(find_system_chromium);
    match executable {
        Some(path) => builder = builder.chrome_executable(path),
        None => {
            return Err(AppfetchError::session_init(
                "no Chromium executable found; install chromium or set APPFETCH_CHROME",
            ))
        }
    }

    builder
        .build()
        .map_err(AppfetchError::session_init)
}

/// Look for a system Chromium in the usual places, then on PATH
fn find_system_chromium() -> Option<PathBuf> {
    let system_paths = [
        "/usr/bin/chromium",
        "/usr/bin/chromium-browser",
        "/usr/bin/google-chrome",
        "/usr/local/bin/chromium",
        "/Applications/Chromium.app/Contents/MacOS/Chromium",
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    ];
    for path in &system_paths {
        if Path::new(path).exists() {
            return Some(PathBuf::from(path));
        }
    }

    which("chromium")
        .or_else(|_| which("chromium-browser"))
        .or_else(|_| which("google-chrome"))
        .ok()
}
