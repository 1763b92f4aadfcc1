//! Appfetch - Installer Download Automation
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appfetch::runlog::RunLog;
use appfetch::targets::TargetName;
use appfetch::{Config, Orchestrator, RunReport, Verdict};

/// Appfetch - Installer Download Automation
#[derive(Parser, Debug)]
#[command(name = "appfetch")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Directory where downloads should land
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// Deadline for the transfer in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download a specific installer
    #[command(after_help = "Examples:\n  appfetch download amd\n  appfetch download roblox\n  appfetch download vivaldi")]
    Download {
        /// Target to download (case-insensitive)
        #[arg(value_enum, ignore_case = true)]
        target: TargetName,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started = Instant::now();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "appfetch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if args.headed {
        config.browser.headless = false;
    }

    if let Some(dir) = args.download_dir {
        config.download.dir = Some(dir);
    }

    if let Some(timeout_ms) = args.timeout_ms {
        config.poll.timeout_ms = timeout_ms;
    }

    match args.command {
        Command::Download { target } => {
            let orchestrator = Orchestrator::new(config);
            match orchestrator.run(target.target()).await {
                Ok(report) => {
                    println!("{}", report.outcome_line());
                }
                Err(e) => {
                    // Session construction failed; nothing to recover.
                    // Reported in the same one-line-plus-elapsed shape as
                    // every other outcome.
                    let report = RunReport {
                        verdict: Verdict::Failed(e.to_string()),
                        elapsed: started.elapsed(),
                    };
                    eprintln!("{}", report.outcome_line());
                    RunLog::default().append(&report.outcome_line());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
