//! Batch run configuration.

use std::path::PathBuf;

use anyhow::{Context, Result as AnyhowResult};
use clap::Args;
use ocrscan_batch::{BatchConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};

use crate::TRACING_TARGET_CONFIG;

/// Input and output locations of a batch run.
///
/// # Environment Variables
///
/// - `OCRSCAN_INPUT_DIR` - Directory scanned for images (default: ../dataset/images)
/// - `OCRSCAN_OUTPUT_PATH` - CSV report path (default: ../ocr_results/results_gemini.csv)
#[derive(Debug, Clone, Args)]
#[must_use = "config does nothing unless you use it"]
pub struct BatchArgs {
    /// Directory containing the images to process.
    ///
    /// Only `.jpg`, `.jpeg` and `.png` files directly inside it are used;
    /// subdirectories are not searched.
    #[arg(short = 'i', long, env = "OCRSCAN_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Path of the CSV report.
    ///
    /// Missing parent directories are created; an existing file is replaced.
    #[arg(short = 'o', long, env = "OCRSCAN_OUTPUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,
}

impl BatchArgs {
    /// Builds the runner configuration.
    pub fn to_batch_config(&self) -> BatchConfig {
        BatchConfig::new(&self.input_dir, &self.output_path)
    }

    /// Validates the paths without touching the filesystem.
    pub fn validate(&self) -> AnyhowResult<()> {
        self.to_batch_config()
            .validate()
            .context("invalid batch paths")
    }

    /// Logs the batch configuration.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            input_dir = %self.input_dir.display(),
            output_path = %self.output_path.display(),
            "Batch configuration"
        );
    }
}

impl Default for BatchArgs {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
