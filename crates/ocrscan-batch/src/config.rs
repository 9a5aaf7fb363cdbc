//! Batch run configuration.

use std::path::{Path, PathBuf};

use ocrscan_core::ocr::DEFAULT_INSTRUCTION;

use crate::error::{BatchError, Result};

/// Default directory scanned for images.
pub const DEFAULT_INPUT_DIR: &str = "../dataset/images";

/// Default location of the CSV report.
pub const DEFAULT_OUTPUT_PATH: &str = "../ocr_results/results_gemini.csv";

/// Configuration for a single batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory whose image files are processed.
    pub input_dir: PathBuf,
    /// CSV report path; parent directories are created as needed.
    pub output_path: PathBuf,
    /// Instruction sent with every image.
    pub instruction: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH)
    }
}

impl BatchConfig {
    /// Creates a configuration with the default instruction.
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            instruction: DEFAULT_INSTRUCTION.to_owned(),
        }
    }

    /// Replaces the instruction sent with every image.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Directory that must exist before the report is written, if any.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(BatchError::InvalidConfig(
                "input directory must not be empty".to_string(),
            ));
        }

        if self.output_path.file_name().is_none() {
            return Err(BatchError::InvalidConfig(format!(
                "output path '{}' does not name a file",
                self.output_path.display()
            )));
        }

        if self.instruction.trim().is_empty() {
            return Err(BatchError::InvalidConfig(
                "instruction must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
