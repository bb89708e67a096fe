//! Core data types for the client.
//!
//! Request and response shapes match the LegalEase backend's JSON API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{validate_max_new_tokens, validate_query, validate_top_k};
use crate::error::Result;

/// Request body for `/rag/answer` and `/rag/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    /// The user's question.
    pub query: String,

    /// Number of sources to retrieve.
    pub top_k: u32,

    /// Upper bound on generated answer length.
    pub max_new_tokens: u32,
}

impl AnswerRequest {
    /// Build a validated request. The query is trimmed before use.
    pub fn new(query: &str, top_k: u32, max_new_tokens: u32) -> Result<Self> {
        validate_query(query)?;
        validate_top_k(top_k)?;
        validate_max_new_tokens(max_new_tokens)?;

        Ok(Self {
            query: query.trim().to_string(),
            top_k,
            max_new_tokens,
        })
    }
}

/// Chunk identifier, which the service may emit as a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChunkId {
    Number(i64),
    Text(String),
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A retrieved passage with provenance and a relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCitation {
    /// Unique identifier of the retrieved chunk.
    #[serde(default)]
    pub chunk_id: ChunkId,

    /// Name of the law the passage comes from.
    #[serde(default)]
    pub law_name: String,

    /// Section within the law.
    #[serde(default)]
    pub section_id: String,

    /// Section title, when the dataset carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,

    /// Legal domain, e.g. "corporate".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Jurisdiction of the law.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,

    /// Relevance score from the retriever.
    #[serde(default)]
    pub score: f64,

    /// The passage text.
    #[serde(default)]
    pub text: String,
}

/// Response body of `/rag/answer`.
///
/// Missing fields default to empty rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    /// Generated answer text.
    #[serde(default)]
    pub answer: String,

    /// Supporting citations, ordered by relevance.
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
}

/// Response body of `/rag/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub results: Vec<SourceCitation>,
}

/// Response body of `/rag/build`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildResponse {
    pub indexed_chunks: u64,
    pub embedding_model: String,
    pub index_path: String,
}

/// Response body of the health and readiness checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_answer_request_trims_query() {
        let request = AnswerRequest::new("  What is a charge?  ", 3, 128).unwrap();
        assert_eq!(request.query, "What is a charge?");
    }

    #[test]
    fn test_answer_request_rejects_short_query() {
        assert!(AnswerRequest::new("ab", 3, 128).is_err());
    }

    #[test]
    fn test_answer_request_rejects_bad_ranges() {
        assert!(AnswerRequest::new("valid query", 0, 128).is_err());
        assert!(AnswerRequest::new("valid query", 3, 16).is_err());
    }

    #[test]
    fn test_answer_request_serialization() {
        let request = AnswerRequest::new("director duties", 5, 256).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "query": "director duties",
                "top_k": 5,
                "max_new_tokens": 256,
            })
        );
    }

    #[test]
    fn test_chunk_id_accepts_number_and_string() {
        let n: ChunkId = serde_json::from_str("1").unwrap();
        assert_eq!(n, ChunkId::Number(1));
        assert_eq!(n.to_string(), "1");

        let s: ChunkId = serde_json::from_str(r#""companies_act_s1_c0""#).unwrap();
        assert_eq!(s, ChunkId::Text("companies_act_s1_c0".to_string()));
        assert_eq!(s.to_string(), "companies_act_s1_c0");
    }

    #[test]
    fn test_answer_response_full() {
        let body = r#"{
            "answer": "A",
            "sources": [
                {"chunk_id": 1, "law_name": "Companies Act", "section_id": "1", "score": 0.9, "text": "..."}
            ]
        }"#;
        let response: AnswerResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.answer, "A");
        assert_eq!(response.sources.len(), 1);
        assert_eq!(response.sources[0].law_name, "Companies Act");
        assert_eq!(response.sources[0].section_id, "1");
        assert_eq!(response.sources[0].score, 0.9);
    }

    #[test]
    fn test_answer_response_missing_fields_default_empty() {
        let response: AnswerResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.answer, "");
        assert!(response.sources.is_empty());
    }

    #[test]
    fn test_source_citation_optional_provenance() {
        let body = r#"{
            "chunk_id": "c1",
            "law_name": "Companies Act",
            "section_id": "1",
            "section_title": "Short title",
            "domain": "corporate",
            "jurisdiction": "PK",
            "score": 0.5,
            "text": "..."
        }"#;
        let citation: SourceCitation = serde_json::from_str(body).unwrap();
        assert_eq!(citation.section_title.as_deref(), Some("Short title"));
        assert_eq!(citation.jurisdiction.as_deref(), Some("PK"));
    }

    #[test]
    fn test_search_response() {
        let body = r#"{"query": "charges", "results": []}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.query, "charges");
        assert!(response.results.is_empty());
    }
}
