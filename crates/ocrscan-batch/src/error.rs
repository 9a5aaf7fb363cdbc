//! Error types for batch runs.

use std::io;
use std::path::PathBuf;

use ocrscan_core::ErrorKind;
use thiserror::Error;

/// Result type for batch operations.
pub type Result<T, E = BatchError> = std::result::Result<T, E>;

/// Errors that abort a batch run.
///
/// Per-file failures never surface here; they are reported as
/// [`ProcessError`] and the run moves on to the next file.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Batch configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The directory that should hold the report could not be created.
    #[error("Failed to create output directory '{}': {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input directory could not be listed.
    #[error("Failed to read input directory '{}': {source}", path.display())]
    ReadInputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report could not be encoded.
    #[error("Failed to encode report: {0}")]
    EncodeReport(#[from] csv::Error),

    /// The report could not be written.
    #[error("Failed to write report '{}': {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure to process a single image.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The image file could not be read.
    #[error("failed to read image: {0}")]
    Read(#[source] io::Error),

    /// The OCR provider rejected or failed the request.
    #[error("OCR request failed: {0}")]
    Ocr(#[from] ocrscan_core::Error),
}

impl ProcessError {
    /// Returns the OCR error kind, if the failure came from the provider.
    pub fn ocr_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Read(_) => None,
            Self::Ocr(err) => Some(err.kind()),
        }
    }

    /// Returns true if the same file may succeed on a later run.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Read(err) => matches!(
                err.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
            ),
            Self::Ocr(err) => err.is_retryable(),
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Read(_) => "read",
            Self::Ocr(err) => err.kind_str(),
        }
    }
}
