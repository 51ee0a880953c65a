//! Error types for the document Q&A service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request validation error (missing or invalid fields)
    #[error("{0}")]
    Validation(String),

    /// Unsupported input kind
    #[error("Unsupported input type: {0}")]
    UnsupportedInput(String),

    /// No usable content in the input
    #[error("Empty content: {0}")]
    EmptyContent(String),

    /// Session not found
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Content loading error (fetch, parse, OCR)
    #[error("Failed to load content from '{source_name}': {message}")]
    Load { source_name: String, message: String },

    /// Index build error
    #[error("Index build failed: {0}")]
    IndexBuild(String),

    /// Embedding error
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// LLM error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Web search error
    #[error("Search error: {0}")]
    Search(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a content load error
    pub fn load(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Load {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error", msg.clone()),
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            Error::UnsupportedInput(kind) => (
                StatusCode::BAD_REQUEST,
                "unsupported_input",
                format!("Unsupported input type: {}", kind),
            ),
            Error::EmptyContent(msg) => (StatusCode::BAD_REQUEST, "empty_content", msg.clone()),
            Error::SessionNotFound(_) => (
                StatusCode::NOT_FOUND,
                "not_found",
                "Session not found. Please upload content first.".to_string(),
            ),
            Error::Load { source_name, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "load_error",
                format!("Failed to load content from '{}': {}", source_name, message),
            ),
            Error::IndexBuild(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "index_error", msg.clone())
            }
            Error::Embedding(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "embedding_error", msg.clone())
            }
            Error::Llm(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "llm_error", msg.clone()),
            Error::Search(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "search_error", msg.clone()),
            Error::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "io_error",
                err.to_string(),
            ),
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let resp = Error::validation("question is required").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn session_not_found_maps_to_404() {
        let resp = Error::SessionNotFound("abc".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn llm_error_maps_to_500() {
        let resp = Error::llm("backend unreachable").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
