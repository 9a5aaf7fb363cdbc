//! Mock OCR provider for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use bytes::Bytes;
use ocrscan_core::ocr::{OcrProvider, OcrRequest, OcrResponse};
use ocrscan_core::{Error, ErrorKind, Result};

/// What the mock answers for a given image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    /// Return the image bytes, decoded as UTF-8, as the extracted text.
    Echo,
    /// Return the given text.
    Text(String),
    /// Return a response without a text field.
    NoText,
    /// Fail with the given kind and message.
    Fail(ErrorKind, String),
}

/// A request observed by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Image bytes that were sent.
    pub image: Bytes,
    /// MIME type essence, e.g. `image/png`.
    pub mime_type: String,
    /// Instruction that accompanied the image.
    pub instruction: String,
}

/// Mock OCR provider for testing.
///
/// Outcomes are scripted per image content; images without a script get the
/// default outcome, which echoes the image bytes back as text. Clones share
/// the recorded request log.
#[derive(Clone, Debug)]
pub struct MockOpticalProvider {
    scripted: HashMap<Bytes, MockOutcome>,
    fallback: MockOutcome,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Default for MockOpticalProvider {
    fn default() -> Self {
        Self {
            scripted: HashMap::new(),
            fallback: MockOutcome::Echo,
            requests: Arc::default(),
        }
    }
}

impl MockOpticalProvider {
    /// Creates a mock that echoes every image back as text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the outcome for images without a scripted outcome.
    pub fn with_fallback(mut self, outcome: MockOutcome) -> Self {
        self.fallback = outcome;
        self
    }

    /// Scripts the outcome for an image with exactly these bytes.
    pub fn with_outcome(mut self, image: impl Into<Bytes>, outcome: MockOutcome) -> Self {
        self.scripted.insert(image.into(), outcome);
        self
    }

    /// Scripts a failure for an image with exactly these bytes.
    pub fn failing_on(self, image: impl Into<Bytes>, kind: ErrorKind) -> Self {
        self.with_outcome(image, MockOutcome::Fail(kind, "scripted failure".to_string()))
    }

    /// Returns every request received so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait::async_trait]
impl OcrProvider for MockOpticalProvider {
    async fn process_ocr(&self, request: OcrRequest) -> Result<OcrResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                image: request.image.clone(),
                mime_type: request.mime_type.essence_str().to_owned(),
                instruction: request.instruction.clone(),
            });

        let outcome = self.scripted.get(&request.image).unwrap_or(&self.fallback);
        match outcome {
            MockOutcome::Echo => {
                let text = String::from_utf8_lossy(&request.image).into_owned();
                Ok(OcrResponse::new(request.request_id, text))
            }
            MockOutcome::Text(text) => Ok(OcrResponse::new(request.request_id, text.clone())),
            MockOutcome::NoText => Ok(OcrResponse::empty(request.request_id)),
            MockOutcome::Fail(kind, message) => Err(Error::new(*kind).with_message(message.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_by_default() {
        let mock = MockOpticalProvider::new();
        let response = mock
            .process_ocr(OcrRequest::new(b"Hello".to_vec(), mime::IMAGE_PNG))
            .await
            .unwrap();

        assert_eq!(response.text.as_deref(), Some("Hello"));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_scripted_outcomes() {
        let mock = MockOpticalProvider::new()
            .with_outcome(b"a".to_vec(), MockOutcome::Text("alpha".into()))
            .with_outcome(b"b".to_vec(), MockOutcome::NoText)
            .failing_on(b"c".to_vec(), ErrorKind::RateLimited);

        let a = mock
            .process_ocr(OcrRequest::new(b"a".to_vec(), mime::IMAGE_PNG))
            .await
            .unwrap();
        let b = mock
            .process_ocr(OcrRequest::new(b"b".to_vec(), mime::IMAGE_PNG))
            .await
            .unwrap();
        let c = mock
            .process_ocr(OcrRequest::new(b"c".to_vec(), mime::IMAGE_JPEG))
            .await
            .unwrap_err();

        assert_eq!(a.text.as_deref(), Some("alpha"));
        assert_eq!(b.text, None);
        assert_eq!(c.kind(), ErrorKind::RateLimited);

        let requests = mock.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[2].mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_clones_share_request_log() {
        let mock = MockOpticalProvider::new().with_fallback(MockOutcome::NoText);
        let clone = mock.clone();

        clone
            .process_ocr(OcrRequest::new(b"x".to_vec(), mime::IMAGE_PNG))
            .await
            .unwrap();

        assert_eq!(mock.call_count(), 1);
    }
}
