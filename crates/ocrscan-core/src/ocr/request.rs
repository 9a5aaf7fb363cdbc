//! Request types for OCR operations.

use bytes::Bytes;
use mime::Mime;
use uuid::Uuid;

use super::DEFAULT_INSTRUCTION;
use crate::error::{Error, Result};

/// Request for a single OCR operation.
///
/// The image payload is reference-counted so a request can be cloned for
/// logging or re-submission without copying the image bytes.
#[derive(Debug, Clone)]
pub struct OcrRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// Raw image content.
    pub image: Bytes,
    /// MIME type of the image.
    pub mime_type: Mime,
    /// Instruction sent to the model alongside the image.
    pub instruction: String,
}

impl OcrRequest {
    /// Creates a new OCR request with the default instruction.
    pub fn new(image: impl Into<Bytes>, mime_type: Mime) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            image: image.into(),
            mime_type,
            instruction: DEFAULT_INSTRUCTION.to_owned(),
        }
    }

    /// Replaces the instruction sent with the image.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Returns the size of the image payload in bytes.
    pub fn image_len(&self) -> usize {
        self.image.len()
    }

    /// Validates the request before it is sent to a provider.
    pub fn validate(&self) -> Result<()> {
        if self.image.is_empty() {
            return Err(Error::invalid_input().with_message("image payload is empty"));
        }

        if self.mime_type.type_() != mime::IMAGE {
            return Err(Error::invalid_input()
                .with_message(format!("unsupported MIME type '{}'", self.mime_type)));
        }

        if self.instruction.trim().is_empty() {
            return Err(Error::invalid_input().with_message("instruction is empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_new_request_uses_default_instruction() {
        let request = OcrRequest::new(vec![1, 2, 3], mime::IMAGE_PNG);

        assert_eq!(request.instruction, DEFAULT_INSTRUCTION);
        assert_eq!(request.image_len(), 3);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_ids_are_unique() {
        let a = OcrRequest::new(vec![1], mime::IMAGE_JPEG);
        let b = OcrRequest::new(vec![1], mime::IMAGE_JPEG);
        assert_ne!(a.request_id, b.request_id);
    }

    #[test]
    fn test_validate_rejects_empty_image() {
        let request = OcrRequest::new(Vec::new(), mime::IMAGE_PNG);
        let error = request.validate().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_validate_rejects_non_image_mime() {
        let request = OcrRequest::new(vec![1], mime::APPLICATION_PDF);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_instruction() {
        let request = OcrRequest::new(vec![1], mime::IMAGE_PNG).with_instruction("   ");
        assert!(request.validate().is_err());
    }
}
