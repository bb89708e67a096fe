//! Error types for the client.

use serde::Deserialize;
use thiserror::Error;

use crate::config::{GENERIC_FAILURE_MESSAGE, MAX_NEW_TOKENS_RANGE, MIN_QUERY_CHARS, TOP_K_RANGE};

/// Main error type for the client library.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Query shorter than the minimum after trimming.
    #[error("Query too short: at least {MIN_QUERY_CHARS} characters required")]
    QueryTooShort,

    /// Requested number of sources outside the accepted range.
    #[error("Top-K out of range: {0}. Expected {min}-{max}", min = TOP_K_RANGE.start(), max = TOP_K_RANGE.end())]
    TopKOutOfRange(u32),

    /// Requested generation bound outside the accepted range.
    #[error("Max tokens out of range: {0}. Expected {min}-{max}", min = MAX_NEW_TOKENS_RANGE.start(), max = MAX_NEW_TOKENS_RANGE.end())]
    MaxNewTokensOutOfRange(u32),

    /// Base URL could not be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport-level failure (connection, timeout, malformed response).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the service.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// A submission is already in flight.
    #[error("A request is already in flight")]
    RequestInFlight,
}

/// FastAPI error envelope, e.g. `{"detail": "RAG index not built yet."}`.
#[derive(Deserialize)]
struct ErrorDetail {
    detail: Option<String>,
}

impl ClientError {
    /// Build a service error from a non-2xx status and response body.
    ///
    /// A JSON body with a `detail` field is unwrapped; any other non-empty
    /// body is used verbatim; an empty body falls back to a generic message.
    pub fn service(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .and_then(|e| e.detail);

        let message = match detail {
            Some(d) if !d.trim().is_empty() => d,
            _ if !body.trim().is_empty() => body.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        };

        Self::Service { status, message }
    }

    /// The message to show the user for a failed submission.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_too_short_display() {
        let err = ClientError::QueryTooShort;
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn test_top_k_display() {
        let err = ClientError::TopKOutOfRange(42);
        assert!(err.to_string().contains("42"));
        assert!(err.to_string().contains("1-20"));
    }

    #[test]
    fn test_max_tokens_display() {
        let err = ClientError::MaxNewTokensOutOfRange(4096);
        assert!(err.to_string().contains("4096"));
        assert!(err.to_string().contains("32-1024"));
    }

    #[test]
    fn test_service_error_plain_body() {
        let err = ClientError::service(503, "Service unavailable");
        assert_eq!(err.to_string(), "Service unavailable");
    }

    #[test]
    fn test_service_error_detail_body() {
        let err = ClientError::service(400, r#"{"detail": "RAG index not built yet."}"#);
        assert_eq!(err.to_string(), "RAG index not built yet.");
    }

    #[test]
    fn test_service_error_empty_body_falls_back() {
        let err = ClientError::service(500, "");
        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_service_error_whitespace_body_falls_back() {
        let err = ClientError::service(500, "  \n ");
        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_service_error_json_without_detail_kept_verbatim() {
        let err = ClientError::service(500, r#"{"error": "boom"}"#);
        assert_eq!(err.to_string(), r#"{"error": "boom"}"#);
    }
}
