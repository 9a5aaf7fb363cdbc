//! Gemini OCR provider implementations for ocrscan-core traits.
//!
//! This module provides an implementation of the OCR provider
//! trait using the Gemini `generateContent` API.

mod optical;

pub use optical::GeminiOcrProvider;
