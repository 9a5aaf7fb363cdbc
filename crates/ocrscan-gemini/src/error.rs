//! Error types for ocrscan-gemini
//!
//! Errors raised by the client are specific to HTTP and the Gemini wire
//! format. They are converted into [`ocrscan_core::Error`] at the provider
//! boundary, where each failure is assigned an [`ocrscan_core::ErrorKind`].

use ocrscan_core::ErrorKind;

/// Result type for all operations in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type for Gemini client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP client/connection errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors when sending or receiving data
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Non-success response from the Gemini API
    #[error("Gemini API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    /// Create an API error
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Classifies this error into a provider-independent kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(err) if err.is_timeout() => ErrorKind::Timeout,
            Error::Http(err) if err.is_connect() || err.is_request() => ErrorKind::NetworkError,
            Error::Http(err) if err.is_decode() => ErrorKind::Serialization,
            Error::Http(_) => ErrorKind::NetworkError,
            Error::Serialization(_) => ErrorKind::Serialization,
            Error::UrlParse(_) | Error::InvalidConfig { .. } => ErrorKind::Configuration,
            Error::ApiError { status, .. } => kind_for_status(*status),
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }
}

/// Maps an HTTP status returned by the Gemini API to an error kind.
fn kind_for_status(status: u16) -> ErrorKind {
    match status {
        400 | 413 | 415 | 422 => ErrorKind::InvalidInput,
        401 | 403 => ErrorKind::Authentication,
        404 => ErrorKind::NotFound,
        408 | 504 => ErrorKind::Timeout,
        429 => ErrorKind::RateLimited,
        503 => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::ExternalError,
    }
}

// Import builder error type for From implementation
use crate::client::GeminiBuilderError;

impl From<GeminiBuilderError> for Error {
    fn from(err: GeminiBuilderError) -> Self {
        Error::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

impl From<Error> for ocrscan_core::Error {
    fn from(err: Error) -> Self {
        let kind = err.kind();
        match err {
            Error::ApiError { status, message } => ocrscan_core::Error::new(kind)
                .with_message(format!("Gemini API returned {status}: {message}")),
            Error::InvalidConfig { reason } => ocrscan_core::Error::new(kind).with_message(reason),
            Error::Http(e) => ocrscan_core::Error::new(kind)
                .with_message(e.to_string())
                .with_source(e),
            Error::Serialization(e) => ocrscan_core::Error::new(kind)
                .with_message(e.to_string())
                .with_source(e),
            Error::UrlParse(e) => ocrscan_core::Error::new(kind)
                .with_message(e.to_string())
                .with_source(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (400, ErrorKind::InvalidInput),
            (413, ErrorKind::InvalidInput),
            (422, ErrorKind::InvalidInput),
            (401, ErrorKind::Authentication),
            (403, ErrorKind::Authentication),
            (404, ErrorKind::NotFound),
            (408, ErrorKind::Timeout),
            (429, ErrorKind::RateLimited),
            (500, ErrorKind::ExternalError),
            (502, ErrorKind::ExternalError),
            (503, ErrorKind::ServiceUnavailable),
            (504, ErrorKind::Timeout),
        ];

        for (status, expected) in cases {
            assert_eq!(Error::api_error(status, "x").kind(), expected, "{status}");
        }
    }

    #[test]
    fn test_retryable() {
        assert!(Error::api_error(429, "slow down").is_retryable());
        assert!(Error::api_error(503, "overloaded").is_retryable());
        assert!(!Error::api_error(403, "forbidden").is_retryable());
        assert!(!Error::invalid_config("bad").is_retryable());
    }

    #[test]
    fn test_into_core_error() {
        let core: ocrscan_core::Error = Error::api_error(429, "quota").into();
        assert_eq!(core.kind(), ErrorKind::RateLimited);
        assert_eq!(
            core.message.as_deref(),
            Some("Gemini API returned 429: quota")
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let core: ocrscan_core::Error = Error::from(json_err).into();
        assert_eq!(core.kind(), ErrorKind::Serialization);
        assert!(core.source.is_some());
    }
}
