//! Gemini provider configuration.

use std::time::Duration;

use anyhow::{Context, Result as AnyhowResult, anyhow};
use clap::Args;
use ocrscan_gemini::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig, GeminiCredentials,
    GeminiOcrProvider,
};

use crate::TRACING_TARGET_CONFIG;

/// Gemini model, endpoint and credential settings.
///
/// # Environment Variables
///
/// - `GEMINI_API_KEY` - API key from Google AI Studio (required)
/// - `GEMINI_MODEL` - Model identifier (default: gemini-2.0-flash)
/// - `GEMINI_BASE_URL` - API host (default: https://generativelanguage.googleapis.com/)
/// - `GEMINI_REQUEST_TIMEOUT` - Per-request timeout in seconds (default: 60, max: 600)
/// - `GEMINI_CONNECT_TIMEOUT` - Connection timeout in seconds (default: 10, max: 600)
#[derive(Clone, Args)]
#[must_use = "config does nothing unless you use it"]
pub struct GeminiArgs {
    /// API key sent with every request.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Multimodal model used for text extraction.
    #[arg(short = 'm', long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Gemini API.
    ///
    /// Override to route requests through a proxy or a local stub.
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Maximum time in seconds to wait for a single OCR request.
    #[arg(long, env = "GEMINI_REQUEST_TIMEOUT", default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Maximum time in seconds to wait while connecting.
    #[arg(long, env = "GEMINI_CONNECT_TIMEOUT", default_value_t = 10)]
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for GeminiArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiArgs")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl GeminiArgs {
    /// Validates timeouts and the credential.
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.api_key().is_none() {
            return Err(anyhow!(
                "Gemini API key is missing. Set --api-key or GEMINI_API_KEY."
            ));
        }

        if !(1..=600).contains(&self.request_timeout_secs) {
            return Err(anyhow!(
                "Request timeout {} seconds is invalid. Must be between 1 and 600 seconds.",
                self.request_timeout_secs
            ));
        }

        if !(1..=600).contains(&self.connect_timeout_secs) {
            return Err(anyhow!(
                "Connect timeout {} seconds is invalid. Must be between 1 and 600 seconds.",
                self.connect_timeout_secs
            ));
        }

        Ok(())
    }

    /// Builds the client configuration.
    pub fn to_client_config(&self) -> AnyhowResult<GeminiConfig> {
        let config = GeminiConfig::builder()
            .with_base_url(&self.base_url)?
            .with_model(self.model.as_str())
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .build()?;
        Ok(config)
    }

    /// Returns the trimmed API key, if one is set.
    fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Returns the credentials sent with every request.
    pub fn credentials(&self) -> AnyhowResult<GeminiCredentials> {
        self.api_key()
            .map(GeminiCredentials::api_key)
            .ok_or_else(|| anyhow!("Gemini API key is missing"))
    }

    /// Creates the OCR provider used by the batch runner.
    pub fn create_provider(&self) -> AnyhowResult<GeminiOcrProvider> {
        let config = self
            .to_client_config()
            .context("invalid Gemini configuration")?;
        let client = GeminiClient::new(config, self.credentials()?)
            .context("failed to create Gemini client")?;
        Ok(GeminiOcrProvider::new(client))
    }

    /// Logs the provider configuration (no secrets).
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            model = %self.model,
            base_url = %self.base_url,
            request_timeout_secs = self.request_timeout_secs,
            connect_timeout_secs = self.connect_timeout_secs,
            "Gemini configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GeminiArgs {
        GeminiArgs {
            api_key: Some("test-key".to_string()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }

    #[test]
    fn validate_default_args() {
        assert!(args().validate().is_ok());
    }

    #[test]
    fn reject_missing_or_blank_api_key() {
        let mut args = args();
        args.api_key = Some("   ".to_string());
        assert!(args.validate().is_err());

        args.api_key = None;
        assert!(args.validate().is_err());
        assert!(args.create_provider().is_err());
    }

    #[test]
    fn reject_invalid_timeouts() {
        let mut args = args();

        args.request_timeout_secs = 0;
        assert!(args.validate().is_err());

        args.request_timeout_secs = 601;
        assert!(args.validate().is_err());

        args.request_timeout_secs = 120;
        args.connect_timeout_secs = 0;
        assert!(args.validate().is_err());
    }

    #[test]
    fn client_config_follows_args() {
        let mut args = args();
        args.model = "gemini-1.5-pro".to_string();
        args.request_timeout_secs = 90;

        let config = args.to_client_config().unwrap();
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.timeout, Duration::from_secs(90));
        assert!(
            config
                .generate_content_url()
                .unwrap()
                .as_str()
                .ends_with("/v1beta/models/gemini-1.5-pro:generateContent")
        );
    }

    #[test]
    fn debug_hides_api_key() {
        let debug = format!("{:?}", args());
        assert!(!debug.contains("test-key"));
    }

    #[test]
    fn create_provider_succeeds() {
        assert!(args().create_provider().is_ok());
    }
}
