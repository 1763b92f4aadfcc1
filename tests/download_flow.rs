//! Download flow integration tests
//!
//! Exercises the public API end to end. Tests that need a live Chromium are
//! ignored by default.

use std::fs::File;
use std::time::Duration;

use tempfile::tempdir;
use tokio::time::timeout;

use appfetch::browser::BrowserSession;
use appfetch::core::BrowserConfig;
use appfetch::runlog::RunLog;
use appfetch::targets::DownloadTarget;
use appfetch::{detect, AppfetchError, Config, Orchestrator, Verdict};

#[test]
fn test_detector_over_public_api() {
    let dir = tempdir().unwrap();
    let baseline = detect::census(dir.path()).completed;
    assert_eq!(baseline, 0);

    // A partial marker appears first, then the finished artifact.
    File::create(dir.path().join("setup.exe.part")).unwrap();
    assert!(!detect::is_complete(dir.path(), baseline));

    File::create(dir.path().join("setup.exe")).unwrap();
    assert!(!detect::is_complete(dir.path(), baseline));

    std::fs::remove_file(dir.path().join("setup.exe.part")).unwrap();
    assert!(detect::is_complete(dir.path(), baseline));
}

#[test]
fn test_runlog_line_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("runtime.log");
    RunLog::new(&path).append("vivaldi: Downloaded in 8.40s");

    let contents = std::fs::read_to_string(&path).unwrap();
    let line = contents.lines().next().unwrap();
    let (timestamp, message) = line.split_once(" -> ").unwrap();
    assert!(!timestamp.is_empty());
    assert_eq!(message, "vivaldi: Downloaded in 8.40s");
}

/// Helper to open a session into a scratch download directory
async fn open_scratch_session() -> Result<(BrowserSession, tempfile::TempDir), AppfetchError> {
    let dir = tempdir().unwrap();
    let config = BrowserConfig::default();
    let session = BrowserSession::open(&config, dir.path()).await?;
    Ok((session, dir))
}

/// Test session lifecycle against a real browser
#[tokio::test]
#[ignore] // Requires a system Chromium
async fn test_session_open_navigate_click_close() {
    let (session, _dir) = match open_scratch_session().await {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Skipping test: {}", e);
            return;
        }
    };

    let result = timeout(Duration::from_secs(30), session.navigate("about:blank")).await;
    assert!(result.is_ok(), "Navigation timed out");
    assert!(result.unwrap().is_ok(), "Navigation failed");

    // A blank page has no download trigger to click.
    let click = session.click(".download-button").await;
    assert!(matches!(click, Err(AppfetchError::ElementNotFound(_))));

    session.close().await;
}

/// Test that a missing trigger element surfaces as a Failed verdict, with
/// the outcome still reported and logged
#[tokio::test]
#[ignore] // Requires a system Chromium
async fn test_missing_trigger_yields_failed_verdict() {
    let target = DownloadTarget {
        name: "blank",
        page_url: "about:blank",
        trigger_selector: "#no-such-trigger",
        cookie_consent_selector: None,
    };

    let dir = tempdir().unwrap();
    let log_path = dir.path().join("runtime.log");
    let mut config = Config::default();
    config.download.dir = Some(dir.path().join("applications"));

    let orchestrator = Orchestrator::with_runlog(config, RunLog::new(&log_path));
    let report = match orchestrator.run(&target).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Skipping test: {}", e);
            return;
        }
    };

    match report.verdict {
        Verdict::Failed(reason) => assert!(reason.contains("trigger not found")),
        other => panic!("expected Failed verdict, got {}", other),
    }

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("blank: Download failed: trigger not found"));
}
