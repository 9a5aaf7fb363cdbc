//! Authentication credentials
//!
//! This module provides authentication credential types and constructors for the Gemini client.

use std::fmt;

/// Authentication credentials for the Gemini API
///
/// Google AI Studio keys are sent in the `x-goog-api-key` header; OAuth
/// access tokens (Vertex-style proxies) are sent as a bearer token.
#[derive(Clone)]
pub enum GeminiCredentials {
    /// API key authentication
    ApiKey(String),
    /// Bearer token authentication
    BearerToken(String),
}

impl GeminiCredentials {
    /// Create API key credentials
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(key.into())
    }

    /// Create bearer token credentials
    pub fn bearer_token(token: impl Into<String>) -> Self {
        Self::BearerToken(token.into())
    }

    /// Returns the credential kind (for debugging/logging purposes only).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "api_key",
            Self::BearerToken(_) => "bearer_token",
        }
    }

    /// Returns true if the secret is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::ApiKey(secret) | Self::BearerToken(secret) => secret.trim().is_empty(),
        }
    }

    /// Add authentication headers to a request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::ApiKey(key) => request.header("x-goog-api-key", key),
            Self::BearerToken(token) => request.bearer_auth(token),
        }
    }
}

impl fmt::Debug for GeminiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GeminiCredentials")
            .field(&self.kind())
            .field(&"<redacted>")
            .finish()
    }
}
