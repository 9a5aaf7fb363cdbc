//! Convenient re-exports for common use.

pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::ocr::{BoxedOcrProvider, DEFAULT_INSTRUCTION, OcrProvider, OcrRequest, OcrResponse};
