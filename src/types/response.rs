//! API request and response shapes

use serde::{Deserialize, Serialize};

/// Where an answer came from.
///
/// Used by the internal answering pipeline. The `/api/search-web` response
/// intentionally does not serialize this enum: its wire values
/// (`"google_search"`, `"gemini_fallback"`) are part of the public API and
/// carry a finer distinction than `WebSearch`/`LlmFallback`, so the handler
/// writes those strings directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Grounded in the session's indexed documents
    Document,
    /// Web-search-augmented LLM call
    WebSearch,
    /// Raw LLM knowledge, no retrieval context
    LlmFallback,
}

/// Result of answering a single question
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResult {
    /// Answer text, returned verbatim from the model
    pub text: String,
    /// Which path produced the answer
    pub source: AnswerSource,
    /// Whether the not-found heuristic fired on the text
    pub not_found: bool,
}

/// Local preview of ingested content. Always success-shaped; failures are
/// reported inside the payload, never propagated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPreview {
    /// Human-readable description of the source
    pub source: String,
    /// First 300 characters of the combined content
    pub text_preview: String,
    /// Total character count of the combined content
    pub character_count: usize,
    /// Number of documents previewed
    pub document_count: usize,
}

/// Request body for POST /api/query
#[derive(Debug, Deserialize)]
pub struct QueryInput {
    pub session_id: String,
    pub question: String,
}

/// Request body for POST /api/search-web
#[derive(Debug, Deserialize)]
pub struct SearchInput {
    pub question: String,
}

/// Request body for POST /api/upload-json (URL or text input)
#[derive(Debug, Deserialize)]
pub struct ContentInput {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Request body for POST /api/add-context-json
#[derive(Debug, Deserialize)]
pub struct AddContextInput {
    pub session_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Response for upload endpoints
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub session_id: String,
    pub summary: String,
    pub content_type: String,
}

/// Response for POST /api/query
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub success: bool,
    pub answer: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_found: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_search_web: Option<bool>,
}

/// Response for POST /api/search-web
#[derive(Debug, Serialize)]
pub struct SearchWebResponse {
    pub success: bool,
    pub answer: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Description of content appended to a session
#[derive(Debug, Serialize)]
pub struct AddedContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub name: String,
    pub preview: ContentPreview,
}

/// Response for add-context endpoints
#[derive(Debug, Serialize)]
pub struct AddContextResponse {
    pub success: bool,
    pub summary: String,
    pub added_content: AddedContent,
}

/// Response for GET /api/sessions/:id/summary
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: String,
}

/// Response for GET /api/sessions/:id/info
#[derive(Debug, Serialize)]
pub struct SessionInfoResponse {
    pub success: bool,
    pub session_id: String,
    pub document_count: usize,
    pub total_characters: usize,
    pub summary: String,
    pub has_qa_chain: bool,
}

/// Response for DELETE /api/sessions/:id
#[derive(Debug, Serialize)]
pub struct DeleteSessionResponse {
    pub success: bool,
    pub message: String,
}

/// Per-session entry in the session list
#[derive(Debug, Serialize)]
pub struct SessionListEntry {
    pub session_id: String,
    pub document_count: usize,
    pub has_summary: bool,
}

/// Response for GET /api/sessions
#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    pub success: bool,
    pub count: usize,
    pub sessions: Vec<SessionListEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_response_omits_unset_flags() {
        let response = QueryResponse {
            success: true,
            answer: "The price is $10".to_string(),
            source: "document".to_string(),
            not_found: None,
            can_search_web: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("not_found").is_none());
        assert!(json.get("can_search_web").is_none());
    }

    #[test]
    fn added_content_serializes_type_field() {
        let added = AddedContent {
            content_type: "url".to_string(),
            name: "https://example.com".to_string(),
            preview: ContentPreview {
                source: "URL: https://example.com".to_string(),
                text_preview: "hello".to_string(),
                character_count: 5,
                document_count: 1,
            },
        };
        let json = serde_json::to_value(&added).unwrap();
        assert_eq!(json["type"], "url");
    }

    #[test]
    fn answer_source_uses_snake_case() {
        let json = serde_json::to_value(AnswerSource::LlmFallback).unwrap();
        assert_eq!(json, "llm_fallback");
    }
}
