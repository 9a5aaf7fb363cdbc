//! Gemini client implementation
//!
//! This module provides the main client interface for the Gemini API.

use reqwest::{Client as HttpClient, ClientBuilder};
use url::Url;

use super::wire::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use super::{GeminiConfig, GeminiCredentials};
use crate::TRACING_TARGET_CLIENT;
use crate::error::{Error, Result};

/// Client for the Gemini `generateContent` API.
///
/// The client owns a pooled HTTP client and resolves the endpoint URL once at
/// construction, so it is cheap to clone and reuse across many requests.
///
/// # Examples
///
/// ```rust,ignore
/// use ocrscan_gemini::{GeminiClient, GeminiConfig, GeminiCredentials};
/// use std::time::Duration;
///
/// let config = GeminiConfig::builder()
///     .with_model("gemini-2.0-flash")
///     .with_timeout(Duration::from_secs(60))
///     .build()?;
///
/// let credentials = GeminiCredentials::api_key("your-api-key");
/// let client = GeminiClient::new(config, credentials)?;
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: HttpClient,
    config: GeminiConfig,
    credentials: GeminiCredentials,
    endpoint: Url,
}

impl GeminiClient {
    /// Create a new Gemini client with the given configuration and credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are blank, the endpoint URL cannot
    /// be built, or the HTTP client cannot be created.
    pub fn new(config: GeminiConfig, credentials: GeminiCredentials) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %config.base_url,
            model = %config.model,
            credentials = credentials.kind(),
            "Creating Gemini client"
        );

        if credentials.is_blank() {
            return Err(Error::invalid_config("Gemini credentials must not be empty"));
        }

        let endpoint = config.generate_content_url()?;

        let http_client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %endpoint,
            "Gemini client created successfully"
        );

        Ok(Self {
            http_client,
            config,
            credentials,
            endpoint,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Get the resolved `generateContent` endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the credentials type (for debugging/logging purposes only).
    pub fn credentials_type(&self) -> &'static str {
        self.credentials.kind()
    }

    /// Send a `generateContent` request and decode the reply.
    ///
    /// Non-success statuses are returned as [`Error::ApiError`] carrying the
    /// message from the Gemini error envelope.
    pub(crate) async fn generate_content(
        &self,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let request = self.http_client.post(self.endpoint.clone()).json(body);
        let response = self.credentials.apply(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = ErrorEnvelope::message_from_body(&body);

            tracing::debug!(
                target: TRACING_TARGET_CLIENT,
                status = status.as_u16(),
                message = %message,
                "Gemini API returned an error status"
            );

            return Err(Error::api_error(status.as_u16(), message));
        }

        let bytes = response.bytes().await?;
        let decoded = serde_json::from_slice::<GenerateContentResponse>(&bytes)?;
        Ok(decoded)
    }
}
