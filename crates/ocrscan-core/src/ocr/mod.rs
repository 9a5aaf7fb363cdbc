//! Optical Character Recognition (OCR) abstractions.
//!
//! This module provides the trait and types for extracting plain text from
//! images through an external OCR capability.

use std::sync::Arc;

mod request;
mod response;

pub use request::OcrRequest;
pub use response::OcrResponse;

pub use crate::{Error, ErrorKind, Result};

/// Instruction sent with every image unless a request overrides it.
pub const DEFAULT_INSTRUCTION: &str = "Extract all text from this image as plain text.";

/// Type alias for a shared, type-erased OCR provider.
pub type BoxedOcrProvider = Arc<dyn OcrProvider>;

/// Core trait for OCR operations.
///
/// Implementations send the image and instruction to an OCR capability and
/// return whatever text it produced. Failures are reported with an
/// [`ErrorKind`] so callers can separate transient errors from permanent ones.
#[async_trait::async_trait]
pub trait OcrProvider: Send + Sync {
    /// Process an image with OCR and return the extracted text.
    ///
    /// This method takes ownership of the request to allow efficient processing
    /// without unnecessary cloning.
    async fn process_ocr(&self, request: OcrRequest) -> Result<OcrResponse>;

    /// Short name of the backend, used in logs.
    fn provider_name(&self) -> &str;
}

#[async_trait::async_trait]
impl<T> OcrProvider for Arc<T>
where
    T: OcrProvider + ?Sized,
{
    async fn process_ocr(&self, request: OcrRequest) -> Result<OcrResponse> {
        (**self).process_ocr(request).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    #[async_trait::async_trait]
    impl OcrProvider for EchoProvider {
        async fn process_ocr(&self, request: OcrRequest) -> Result<OcrResponse> {
            let text = String::from_utf8_lossy(&request.image).into_owned();
            Ok(OcrResponse::new(request.request_id, text))
        }

        fn provider_name(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_boxed_provider_delegates() {
        let provider: BoxedOcrProvider = Arc::new(EchoProvider);
        let request = OcrRequest::new(b"hello".to_vec(), mime::IMAGE_PNG);
        let request_id = request.request_id;

        let response = provider.process_ocr(request).await.unwrap();

        assert_eq!(provider.provider_name(), "echo");
        assert_eq!(response.request_id, request_id);
        assert_eq!(response.text.as_deref(), Some("hello"));
    }
}
