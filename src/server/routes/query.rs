//! Query endpoints: grounded QA and the web-search fallback

use axum::{extract::State, Json};

use crate::answer::{self, QUOTA_EXCEEDED, SEARCH_ERROR_PREFIX};
use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::response::{QueryInput, QueryResponse, SearchInput, SearchWebResponse};

/// POST /api/query - Answer a question against a session's documents
pub async fn query_document(
    State(state): State<AppState>,
    Json(input): Json<QueryInput>,
) -> Result<Json<QueryResponse>> {
    if input.session_id.is_empty() {
        return Err(Error::validation("session_id is required"));
    }
    if input.question.is_empty() {
        return Err(Error::validation("question is required"));
    }

    let session = state.sessions().get(&input.session_id)?;

    tracing::info!("Query for session {}: \"{}\"", input.session_id, input.question);

    let result = answer::answer(
        &session.index,
        state.embedder(),
        state.llm(),
        state.classifier(),
        &input.question,
        state.config().retrieval.top_k,
    )
    .await?;

    let mut response = QueryResponse {
        success: true,
        answer: result.text,
        source: "document".to_string(),
        not_found: None,
        can_search_web: None,
    };

    if result.not_found {
        response.not_found = Some(true);
        response.can_search_web = Some(true);
    }

    Ok(Json(response))
}

/// POST /api/search-web - Answer from web search, falling back to raw LLM
/// knowledge on quota exhaustion or search errors
pub async fn search_web(
    State(state): State<AppState>,
    Json(input): Json<SearchInput>,
) -> Result<Json<SearchWebResponse>> {
    if input.question.is_empty() {
        return Err(Error::validation("question is required"));
    }

    let google_result = answer::search_web(state.search(), &input.question).await;

    if google_result == QUOTA_EXCEEDED {
        let fallback = answer::answer_with_llm_knowledge(state.llm(), &input.question).await;
        return Ok(Json(SearchWebResponse {
            success: true,
            answer: fallback,
            source: "gemini_fallback".to_string(),
            message: Some(
                "Google Search quota exceeded. Used Gemini's general knowledge.".to_string(),
            ),
        }));
    }

    if google_result.starts_with(SEARCH_ERROR_PREFIX) {
        let fallback = answer::answer_with_llm_knowledge(state.llm(), &input.question).await;
        return Ok(Json(SearchWebResponse {
            success: true,
            answer: fallback,
            source: "gemini_fallback".to_string(),
            message: Some("Google search error. Used Gemini's general knowledge.".to_string()),
        }));
    }

    Ok(Json(SearchWebResponse {
        success: true,
        answer: google_result,
        source: "google_search".to_string(),
        message: None,
    }))
}
