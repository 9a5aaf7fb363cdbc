//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── batch: BatchArgs    # Input directory, report path
//! └── gemini: GeminiArgs  # API key, model, endpoint, timeouts
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! ocrscan --input-dir ./images --output-path ./out/results.csv
//!
//! # Or via environment variables
//! GEMINI_API_KEY="..." OCRSCAN_INPUT_DIR=./images ocrscan
//! ```

mod batch;
mod gemini;

use std::process;

use anyhow::Context;
pub use batch::BatchArgs;
use clap::Parser;
pub use gemini::GeminiArgs;

use crate::TRACING_TARGET_STARTUP;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "ocrscan")]
#[command(about = "Extracts text from a directory of images into a CSV report")]
#[command(version)]
pub struct Cli {
    /// Input and output locations.
    #[clap(flatten)]
    pub batch: BatchArgs,

    /// Gemini provider configuration.
    #[clap(flatten)]
    pub gemini: GeminiArgs,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.batch
            .validate()
            .context("invalid batch configuration")?;
        self.gemini
            .validate()
            .context("invalid Gemini configuration")?;
        Ok(())
    }

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        Self::log_build_info();
        self.batch.log();
        self.gemini.log();
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
