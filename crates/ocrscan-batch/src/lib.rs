#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for the batch loop.
pub const TRACING_TARGET_RUNNER: &str = "ocrscan_batch::runner";

/// Tracing target for input directory scanning.
pub const TRACING_TARGET_SCAN: &str = "ocrscan_batch::scan";

/// Tracing target for report writing.
pub const TRACING_TARGET_REPORT: &str = "ocrscan_batch::report";

mod clock;
mod config;
mod error;
mod record;
mod report;
mod runner;
mod scan;

pub use crate::clock::{Clock, SteppingClock, SystemClock};
pub use crate::config::{BatchConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};
pub use crate::error::{BatchError, ProcessError, Result};
pub use crate::record::{OcrRecord, REPORT_COLUMNS, RecordSet, round_seconds};
pub use crate::report::{encode_csv, write_csv};
pub use crate::runner::{BatchRunner, BatchSummary};
pub use crate::scan::{ImageFormat, InputImage, scan_images};
