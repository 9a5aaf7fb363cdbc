#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for Gemini client operations.
///
/// Use this target for logging client initialization, configuration, and client-level errors.
pub const TRACING_TARGET_CLIENT: &str = "ocrscan_gemini::client";

/// Tracing target for Gemini provider operations.
pub const TRACING_TARGET_PROVIDER: &str = "ocrscan_gemini::provider";

mod client;
pub mod error;
#[doc(hidden)]
pub mod prelude;
pub mod provider;

pub use crate::client::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiBuilder, GeminiBuilderError, GeminiClient,
    GeminiConfig, GeminiCredentials,
};
pub use crate::error::{Error, Result};
pub use crate::provider::GeminiOcrProvider;
