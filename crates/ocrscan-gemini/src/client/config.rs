//! Gemini client configuration
//!
//! This module provides configuration structures and builders for the Gemini client.

use std::time::Duration;

use derive_builder::Builder;
use url::Url;

use crate::error::{Error, Result};

/// Default Gemini API host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";

/// Default multimodal model used for OCR.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for the Gemini client
///
/// Contains the endpoint, model and transport settings for the client.
#[derive(Debug, Clone, Builder)]
#[builder(
    name = "GeminiBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
pub struct GeminiConfig {
    /// Base URL for the Gemini API, always ending in `/`
    #[builder(setter(custom), default = "GeminiConfig::default_base_url()")]
    pub base_url: Url,
    /// API version path segment
    #[builder(default = "\"v1beta\".to_string()")]
    pub api_version: String,
    /// Model identifier, e.g. `gemini-2.0-flash`
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    pub model: String,
    /// Request timeout duration
    #[builder(default = "Duration::from_secs(60)")]
    pub timeout: Duration,
    /// Connection timeout duration
    #[builder(default = "Duration::from_secs(10)")]
    pub connect_timeout: Duration,
    /// User agent string for requests
    #[builder(default = "GeminiConfig::default_user_agent()")]
    pub user_agent: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            api_version: "v1beta".to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: Self::default_user_agent(),
        }
    }
}

impl GeminiConfig {
    /// Create a new configuration builder
    pub fn builder() -> GeminiBuilder {
        GeminiBuilder::default()
    }

    /// Returns the `generateContent` endpoint for the configured model.
    pub fn generate_content_url(&self) -> Result<Url> {
        let model = self.model.trim_start_matches("models/");
        let path = format!("{}/models/{}:generateContent", self.api_version, model);
        Ok(self.base_url.join(&path)?)
    }

    fn default_base_url() -> Url {
        Url::parse(DEFAULT_BASE_URL).expect("Valid default URL")
    }

    fn default_user_agent() -> String {
        format!("ocrscan-gemini/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl GeminiBuilder {
    /// Set the base URL for the Gemini API
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        let mut parsed: Url = url
            .parse()
            .map_err(|e| Error::invalid_config(format!("Invalid base URL '{}': {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_config(format!(
                "Base URL '{url}' must use http or https"
            )));
        }

        // Url::join drops the last path segment unless the path ends in '/'.
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        self.base_url = Some(parsed);
        Ok(self)
    }

    fn validate_config(&self) -> std::result::Result<(), String> {
        if let Some(timeout) = &self.timeout
            && timeout.is_zero()
        {
            return Err("Timeout must be greater than 0".to_string());
        }

        if let Some(connect_timeout) = &self.connect_timeout
            && connect_timeout.is_zero()
        {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if let Some(model) = &self.model {
            let model = model.trim_start_matches("models/");
            if model.trim().is_empty() {
                return Err("Model must not be empty".to_string());
            }
            if model.contains(['/', '?', '#']) {
                return Err(format!("Model '{model}' contains invalid characters"));
            }
        }

        if let Some(api_version) = &self.api_version
            && api_version.trim().is_empty()
        {
            return Err("API version must not be empty".to_string());
        }

        Ok(())
    }
}
