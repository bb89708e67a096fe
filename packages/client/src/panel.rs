//! Query panel state machine.
//!
//! The panel owns the query text, the two retrieval parameters, and the
//! lifecycle of a single submission: idle, loading, settled with an answer,
//! or settled with an error. At most one request is in flight at a time,
//! and beginning a submission discards whatever the previous one produced.

use crate::config::{DEFAULT_MAX_NEW_TOKENS, DEFAULT_TOP_K, EXAMPLE_QUERY, MIN_QUERY_CHARS};
use crate::error::{ClientError, Result};
use crate::service::AnswerService;
use crate::types::{AnswerRequest, AnswerResponse, SourceCitation};

/// Lifecycle of the current submission.
///
/// Success and error are separate variants, so a displayed answer and a
/// displayed error can never coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    /// Nothing submitted yet, or inputs edited since the last settle.
    Idle,

    /// A request is in flight.
    Loading,

    /// The last submission produced an answer.
    Success(AnswerResponse),

    /// The last submission failed; holds the message to display.
    Error(String),
}

/// Form state for one query session.
#[derive(Debug, Clone)]
pub struct QueryPanel {
    query: String,
    top_k: u32,
    max_new_tokens: u32,
    state: PanelState,
}

impl Default for QueryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryPanel {
    /// Create an idle panel with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: String::new(),
            top_k: DEFAULT_TOP_K,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            state: PanelState::Idle,
        }
    }

    /// Set the query text. Validation happens at submission time.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Set the number of sources to retrieve. Validated at submission time.
    pub fn set_top_k(&mut self, top_k: u32) {
        self.top_k = top_k;
    }

    /// Set the generation length bound. Validated at submission time.
    pub fn set_max_new_tokens(&mut self, max_new_tokens: u32) {
        self.max_new_tokens = max_new_tokens;
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, PanelState::Loading)
    }

    /// Whether a submission would start: query long enough and nothing
    /// already in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.query.trim().chars().count() >= MIN_QUERY_CHARS && !self.is_loading()
    }

    /// The displayed answer, if the last submission succeeded.
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        match &self.state {
            PanelState::Success(response) => Some(response.answer.as_str()),
            _ => None,
        }
    }

    /// The displayed sources. Empty unless the last submission succeeded.
    #[must_use]
    pub fn sources(&self) -> &[SourceCitation] {
        match &self.state {
            PanelState::Success(response) => &response.sources,
            _ => &[],
        }
    }

    /// The displayed error message, if the last submission failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            PanelState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Start a submission: validate inputs and transition to loading.
    ///
    /// Moving into [`PanelState::Loading`] discards any previous answer,
    /// sources, or error in one step. Precondition failures leave the
    /// panel's state untouched.
    pub fn begin(&mut self) -> Result<AnswerRequest> {
        if self.is_loading() {
            return Err(ClientError::RequestInFlight);
        }

        let request = AnswerRequest::new(&self.query, self.top_k, self.max_new_tokens)?;
        self.state = PanelState::Loading;
        Ok(request)
    }

    /// Settle the in-flight submission with the service's outcome.
    pub fn settle(&mut self, outcome: Result<AnswerResponse>) {
        self.state = match outcome {
            Ok(response) => PanelState::Success(response),
            Err(e) => PanelState::Error(e.display_message()),
        };
    }

    /// Submit the current query: exactly one outbound call, then settle.
    ///
    /// Precondition failures (short query, out-of-range parameters, already
    /// loading) bubble up without issuing a request; transport and service
    /// failures land in the error state.
    pub async fn submit(&mut self, service: &dyn AnswerService) -> Result<()> {
        let request = self.begin()?;
        let outcome = service.answer(&request).await;
        self.settle(outcome);
        Ok(())
    }

    /// Fill in the fixed demonstration query and submit it.
    pub async fn use_example(&mut self, service: &dyn AnswerService) -> Result<()> {
        self.set_query(EXAMPLE_QUERY);
        self.submit(service).await
    }
}
