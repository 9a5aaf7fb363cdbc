//! Response types for OCR operations.

use uuid::Uuid;

/// Response from a single OCR operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrResponse {
    /// Identifier of the request this response answers.
    pub request_id: Uuid,
    /// Extracted text, or `None` when the provider returned no text field.
    pub text: Option<String>,
}

impl OcrResponse {
    /// Creates a response carrying extracted text.
    pub fn new(request_id: Uuid, text: impl Into<String>) -> Self {
        Self {
            request_id,
            text: Some(text.into()),
        }
    }

    /// Creates a response for a provider reply without any text.
    pub fn empty(request_id: Uuid) -> Self {
        Self {
            request_id,
            text: None,
        }
    }

    /// Returns true if the provider returned a text field.
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    /// Returns the extracted text with surrounding whitespace removed.
    ///
    /// A missing text field yields an empty string.
    pub fn trimmed_text(&self) -> &str {
        self.text.as_deref().map(str::trim).unwrap_or_default()
    }
}
