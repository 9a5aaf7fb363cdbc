#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use std::process;

use anyhow::Context;
use ocrscan_batch::{BatchRunner, BatchSummary};

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "ocrscan_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "ocrscan_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "ocrscan_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error_chain(&error),
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {}", error_chain(&error));
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    telemetry::init_tracing()?;
    log_startup_info();
    cli.log();
    cli.validate()?;

    let provider = cli
        .gemini
        .create_provider()
        .context("failed to create OCR provider")?;

    let summary = BatchRunner::new(cli.batch.to_batch_config(), provider)
        .run()
        .await
        .context("batch run failed")?;

    log_summary(&summary);
    Ok(())
}

/// Logs startup information.
fn log_startup_info() {
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting ocrscan"
    );
}

/// Logs the outcome of a completed run.
fn log_summary(summary: &BatchSummary) {
    tracing::info!(
        target: TRACING_TARGET_SHUTDOWN,
        succeeded = summary.succeeded,
        failed = summary.failed,
        output_path = %summary.output_path.display(),
        "saved OCR results"
    );
}

/// Renders an error with every cause, outermost first.
fn error_chain(error: &anyhow::Error) -> String {
    format!("{error:#}")
}

#[cfg(test)]
mod tests {
    use std::io;

    use anyhow::Context;

    use super::*;

    #[test]
    fn error_chain_keeps_root_cause() {
        let error = Err::<(), _>(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
            .context("Failed to write report 'out/results.csv'")
            .context("batch run failed")
            .unwrap_err();

        assert_eq!(
            error_chain(&error),
            "batch run failed: Failed to write report 'out/results.csv': read-only"
        );
    }
}
