//! Gemini client module
//!
//! This module provides the client for the Gemini `generateContent` API.
//! It handles authentication, request/response processing, and connection management.

mod config;
mod credentials;
mod gemini_client;
pub(crate) mod wire;

pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiBuilder, GeminiBuilderError, GeminiConfig};
pub use credentials::GeminiCredentials;
pub use gemini_client::GeminiClient;
