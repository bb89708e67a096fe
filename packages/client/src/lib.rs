//! LegalEase client - Ask the LegalEase RAG answering service from the
//! terminal.
//!
//! This crate provides a small client for the LegalEase backend: it posts
//! a legal question with two retrieval parameters to the answering
//! endpoint and renders the returned answer alongside its supporting
//! source citations.
//!
//! # Example
//!
//! ```
//! use legalease_client::config;
//!
//! // Validate a query and the retrieval parameters
//! assert!(config::validate_query("What are director duties?").is_ok());
//! assert!(config::validate_top_k(3).is_ok());
//! ```
//!
//! # Architecture
//!
//! The client is organized into several modules:
//!
//! - [`config`]: Configuration constants, validation, and endpoint URLs
//! - [`types`]: Request and response data types
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client and JSON request helpers
//! - [`service`]: Answering service trait and HTTP implementation
//! - [`panel`]: Query panel state machine
//! - [`render`]: Terminal rendering
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod panel;
pub mod render;
pub mod service;
pub mod types;

// Re-export commonly used items
pub use config::{validate_max_new_tokens, validate_query, validate_top_k};
pub use error::{ClientError, Result};
pub use panel::{PanelState, QueryPanel};
pub use service::{AnswerService, RagClient};
pub use types::{AnswerRequest, AnswerResponse, SourceCitation};
