//! Gemini OCR provider implementation.
//!
//! This module implements the [`OcrProvider`] trait for extracting text
//! from images with a Gemini multimodal model.

use ocrscan_core::ocr::{OcrProvider, OcrRequest, OcrResponse};

use crate::client::wire::{GenerateContentRequest, GenerateContentResponse};
use crate::{GeminiClient, TRACING_TARGET_PROVIDER};

/// Gemini OCR provider.
///
/// Sends each image as inline data followed by the request's instruction and
/// returns the text of the first candidate.
///
/// # Example
///
/// ```rust,ignore
/// use ocrscan_gemini::{GeminiClient, GeminiConfig, GeminiCredentials, GeminiOcrProvider};
///
/// let config = GeminiConfig::builder().with_model("gemini-2.0-flash").build()?;
/// let credentials = GeminiCredentials::api_key("your-api-key");
/// let client = GeminiClient::new(config, credentials)?;
/// let provider = GeminiOcrProvider::new(client);
/// ```
#[derive(Clone, Debug)]
pub struct GeminiOcrProvider {
    client: GeminiClient,
}

impl GeminiOcrProvider {
    /// Creates a new Gemini OCR provider.
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &GeminiClient {
        &self.client
    }

    fn build_body(request: &OcrRequest) -> GenerateContentRequest {
        GenerateContentRequest::image_with_instruction(
            &request.image,
            request.mime_type.essence_str(),
            &request.instruction,
        )
    }

    fn into_response(request: &OcrRequest, reply: GenerateContentResponse) -> OcrResponse {
        match reply.text() {
            Some(text) => OcrResponse::new(request.request_id, text),
            None => {
                tracing::debug!(
                    target: TRACING_TARGET_PROVIDER,
                    request_id = %request.request_id,
                    block_reason = reply.block_reason(),
                    finish_reason = reply.finish_reason(),
                    "Gemini reply contained no text"
                );
                OcrResponse::empty(request.request_id)
            }
        }
    }
}

#[async_trait::async_trait]
impl OcrProvider for GeminiOcrProvider {
    async fn process_ocr(&self, request: OcrRequest) -> ocrscan_core::Result<OcrResponse> {
        request.validate()?;

        tracing::debug!(
            target: TRACING_TARGET_PROVIDER,
            request_id = %request.request_id,
            model = %self.client.config().model,
            mime_type = %request.mime_type,
            image_bytes = request.image_len(),
            "Processing OCR request via Gemini"
        );

        let body = Self::build_body(&request);
        let reply = self.client.generate_content(&body).await.map_err(|err| {
            tracing::debug!(
                target: TRACING_TARGET_PROVIDER,
                request_id = %request.request_id,
                error = %err,
                retryable = err.is_retryable(),
                "Gemini request failed"
            );
            ocrscan_core::Error::from(err)
        })?;

        let response = Self::into_response(&request, reply);

        tracing::debug!(
            target: TRACING_TARGET_PROVIDER,
            request_id = %request.request_id,
            text_len = response.text.as_ref().map_or(0, String::len),
            "OCR request processed successfully"
        );

        Ok(response)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use ocrscan_core::ErrorKind;
    use serde_json::json;

    use super::*;
    use crate::{GeminiConfig, GeminiCredentials};

    fn provider() -> GeminiOcrProvider {
        let client = GeminiClient::new(
            GeminiConfig::default(),
            GeminiCredentials::api_key("test-key"),
        )
        .unwrap();
        GeminiOcrProvider::new(client)
    }

    #[test]
    fn test_build_body_uses_request_mime_and_instruction() {
        let request = OcrRequest::new(b"img".to_vec(), mime::IMAGE_JPEG);
        let body = serde_json::to_value(GeminiOcrProvider::build_body(&request)).unwrap();

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], "aW1n");
        assert_eq!(
            parts[1]["text"],
            "Extract all text from this image as plain text."
        );
    }

    #[test]
    fn test_into_response() {
        let request = OcrRequest::new(b"img".to_vec(), mime::IMAGE_PNG);

        let reply: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": " Hello \n" }] } }]
        }))
        .unwrap();
        let response = GeminiOcrProvider::into_response(&request, reply);
        assert_eq!(response.request_id, request.request_id);
        assert_eq!(response.text.as_deref(), Some(" Hello \n"));

        let empty = GeminiOcrProvider::into_response(&request, GenerateContentResponse::default());
        assert_eq!(empty.text, None);
    }

    #[tokio::test]
    async fn test_invalid_request_fails_before_sending() {
        let request = OcrRequest::new(Vec::new(), mime::IMAGE_PNG);
        let error = provider().process_ocr(request).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidInput);
        assert_eq!(provider().provider_name(), "gemini");
    }
}
