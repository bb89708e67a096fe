//! Client for the LegalEase backend.
//!
//! [`AnswerService`] is the seam the query panel talks through, enabling
//! mocking in tests. [`RagClient`] is the HTTP implementation, which also
//! exposes the retrieval, index build, and health endpoints.

use async_trait::async_trait;
use url::Url;

use crate::config::{answer_url, build_url, health_url, llm_ready_url, search_url};
use crate::error::{ClientError, Result};
use crate::http::{create_client, get_json, post_empty, post_json};
use crate::types::{AnswerRequest, AnswerResponse, BuildResponse, HealthResponse, SearchResponse};

/// Trait for answering services, enabling mocking in tests.
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResponse>;
}

/// HTTP client for the LegalEase backend.
#[derive(Debug, Clone)]
pub struct RagClient {
    http: reqwest::Client,
    base_url: String,
}

impl RagClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                source: url::ParseError::RelativeUrlWithoutBase,
            });
        }

        Ok(Self {
            http: create_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieve sources without generating an answer.
    pub async fn search(&self, request: &AnswerRequest) -> Result<SearchResponse> {
        post_json(&self.http, &search_url(&self.base_url), request).await
    }

    /// Ask the backend to (re)build its retrieval index.
    pub async fn build_index(&self) -> Result<BuildResponse> {
        post_empty(&self.http, &build_url(&self.base_url)).await
    }

    /// Backend health check.
    pub async fn health(&self) -> Result<HealthResponse> {
        get_json(&self.http, &health_url(&self.base_url)).await
    }

    /// Language model readiness check.
    pub async fn llm_ready(&self) -> Result<HealthResponse> {
        get_json(&self.http, &llm_ready_url(&self.base_url)).await
    }
}

#[async_trait]
impl AnswerService for RagClient {
    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResponse> {
        post_json(&self.http, &answer_url(&self.base_url), request).await
    }
}

/// Test utilities for the answering service.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// Mock answering service. Returns pre-configured outcomes in order
    /// and records every request it receives.
    pub struct MockAnswerService {
        outcomes: Mutex<Vec<Result<AnswerResponse>>>,
        calls: AtomicUsize,
        requests: Mutex<Vec<AnswerRequest>>,
    }

    impl MockAnswerService {
        pub fn new(outcomes: Vec<Result<AnswerResponse>>) -> Self {
            // Reverse so we can pop from the end
            let mut outcomes = outcomes;
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_answer(answer: &str) -> Self {
            Self::new(vec![Ok(AnswerResponse {
                answer: answer.to_string(),
                sources: Vec::new(),
            })])
        }

        pub fn with_response(response: AnswerResponse) -> Self {
            Self::new(vec![Ok(response)])
        }

        pub fn with_failure(status: u16, body: &str) -> Self {
            Self::new(vec![Err(ClientError::service(status, body))])
        }

        /// Number of answer calls received so far.
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Requests received so far, in order.
        pub fn requests(&self) -> Vec<AnswerRequest> {
            self.requests
                .lock()
                .map(|r| r.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl AnswerService for MockAnswerService {
        async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request.clone());
            }
            let mut outcomes = self
                .outcomes
                .lock()
                .map_err(|e| ClientError::service(0, &format!("mock lock poisoned: {e}")))?;
            outcomes
                .pop()
                .unwrap_or_else(|| Ok(AnswerResponse::default()))
        }
    }
}
