//! OCR requests against a local stand-in for the Gemini API.

use ocrscan_core::ErrorKind;
use ocrscan_core::ocr::{DEFAULT_INSTRUCTION, OcrProvider, OcrRequest};
use ocrscan_gemini::{GeminiClient, GeminiConfig, GeminiCredentials, GeminiOcrProvider};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as seen by the stub server.
struct Captured {
    head: String,
    body: Value,
}

/// Answers exactly one HTTP request with `status` and `body`.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let (head_end, content_length) = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);

            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_ascii_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .map_or(0, |value| value.trim().parse::<usize>().unwrap());
                break (pos + 4, length);
            }
        };

        while buf.len() < head_end + content_length {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body was complete");
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        Captured {
            head: String::from_utf8_lossy(&buf[..head_end]).into_owned(),
            body: serde_json::from_slice(&buf[head_end..head_end + content_length]).unwrap(),
        }
    });

    (base_url, handle)
}

fn provider(base_url: &str) -> GeminiOcrProvider {
    let config = GeminiConfig::builder()
        .with_base_url(base_url)
        .unwrap()
        .build()
        .unwrap();
    let client = GeminiClient::new(config, GeminiCredentials::api_key("test-key")).unwrap();
    GeminiOcrProvider::new(client)
}

fn request() -> OcrRequest {
    OcrRequest::new(b"png-bytes".to_vec(), mime::IMAGE_PNG)
}

#[tokio::test]
async fn test_text_reply() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello\n"},{"text":"World"}]},"finishReason":"STOP"}]}"#,
    )
    .await;

    let response = provider(&base_url).process_ocr(request()).await.unwrap();
    assert_eq!(response.text.as_deref(), Some("Hello\nWorld"));

    let captured = server.await.unwrap();
    let request_line = captured.head.lines().next().unwrap();
    assert_eq!(
        request_line,
        "POST /v1beta/models/gemini-2.0-flash:generateContent HTTP/1.1"
    );
    assert!(
        captured
            .head
            .to_ascii_lowercase()
            .contains("x-goog-api-key: test-key")
    );

    let parts = &captured.body["contents"][0]["parts"];
    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
    assert_eq!(parts[0]["inlineData"]["data"], "cG5nLWJ5dGVz");
    assert_eq!(parts[1]["text"], DEFAULT_INSTRUCTION);
}

#[tokio::test]
async fn test_reply_without_candidates_has_no_text() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#,
    )
    .await;

    let response = provider(&base_url).process_ocr(request()).await.unwrap();
    assert_eq!(response.text, None);
    server.await.unwrap();
}

#[tokio::test]
async fn test_rate_limited_reply_carries_envelope_message() {
    let (base_url, server) = serve_once(
        "429 Too Many Requests",
        r#"{"error":{"code":429,"message":"Quota exceeded for model.","status":"RESOURCE_EXHAUSTED"}}"#,
    )
    .await;

    let error = provider(&base_url).process_ocr(request()).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::RateLimited);
    assert!(error.is_retryable());
    assert_eq!(
        error.message.as_deref(),
        Some("Gemini API returned 429: RESOURCE_EXHAUSTED: Quota exceeded for model.")
    );
    server.await.unwrap();
}

#[tokio::test]
async fn test_malformed_reply_is_a_serialization_error() {
    let (base_url, server) = serve_once("200 OK", "{\"candidates\": [").await;

    let error = provider(&base_url).process_ocr(request()).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Serialization);
    assert!(!error.is_retryable());
    server.await.unwrap();
}
