//! Configuration constants and validation functions for the client.

use std::ops::RangeInclusive;

use crate::error::{ClientError, Result};

/// Default base URL for the LegalEase backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// HTTP timeout in seconds.
///
/// Generation can be slow for long answers, so this is well above the
/// usual request/response budget.
pub const HTTP_TIMEOUT_SECS: u64 = 120;

/// Minimum query length after trimming whitespace.
pub const MIN_QUERY_CHARS: usize = 3;

/// Accepted range for the number of sources to retrieve.
pub const TOP_K_RANGE: RangeInclusive<u32> = 1..=20;

/// Accepted range for the generation length bound.
pub const MAX_NEW_TOKENS_RANGE: RangeInclusive<u32> = 32..=1024;

/// Default number of sources to retrieve.
pub const DEFAULT_TOP_K: u32 = 3;

/// Default generation length bound.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 128;

/// Fixed demonstration query used by the example shortcut.
pub const EXAMPLE_QUERY: &str =
    "Summarize the key obligations under section 1 of the Companies Act, 2017.";

/// Message shown when the service fails without any detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Text wrap width for terminal output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Validate a query string.
///
/// The query must contain at least [`MIN_QUERY_CHARS`] characters after
/// trimming surrounding whitespace.
///
/// # Examples
/// ```
/// use legalease_client::config::validate_query;
///
/// assert!(validate_query("What is a private company?").is_ok());
/// assert!(validate_query("  ab  ").is_err());
/// ```
pub fn validate_query(query: &str) -> Result<()> {
    if query.trim().chars().count() >= MIN_QUERY_CHARS {
        Ok(())
    } else {
        Err(ClientError::QueryTooShort)
    }
}

/// Validate the requested number of sources.
///
/// # Examples
/// ```
/// use legalease_client::config::validate_top_k;
///
/// assert!(validate_top_k(3).is_ok());
/// assert!(validate_top_k(0).is_err());
/// assert!(validate_top_k(21).is_err());
/// ```
pub fn validate_top_k(top_k: u32) -> Result<()> {
    if TOP_K_RANGE.contains(&top_k) {
        Ok(())
    } else {
        Err(ClientError::TopKOutOfRange(top_k))
    }
}

/// Validate the requested generation length bound.
///
/// # Examples
/// ```
/// use legalease_client::config::validate_max_new_tokens;
///
/// assert!(validate_max_new_tokens(128).is_ok());
/// assert!(validate_max_new_tokens(16).is_err());
/// ```
pub fn validate_max_new_tokens(max_new_tokens: u32) -> Result<()> {
    if MAX_NEW_TOKENS_RANGE.contains(&max_new_tokens) {
        Ok(())
    } else {
        Err(ClientError::MaxNewTokensOutOfRange(max_new_tokens))
    }
}

/// Join a base URL and an endpoint path, tolerating a trailing slash.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// URL of the answering endpoint.
pub fn answer_url(base_url: &str) -> String {
    endpoint(base_url, "/rag/answer")
}

/// URL of the retrieval-only endpoint.
pub fn search_url(base_url: &str) -> String {
    endpoint(base_url, "/rag/search")
}

/// URL of the index build endpoint.
pub fn build_url(base_url: &str) -> String {
    endpoint(base_url, "/rag/build")
}

/// URL of the backend health check.
pub fn health_url(base_url: &str) -> String {
    endpoint(base_url, "/")
}

/// URL of the model readiness check.
pub fn llm_ready_url(base_url: &str) -> String {
    endpoint(base_url, "/llm/ready")
}
