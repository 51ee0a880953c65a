//! Session management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::response::{
    DeleteSessionResponse, SessionInfoResponse, SessionListEntry, SessionListResponse,
    SummaryResponse,
};

/// GET /api/sessions - List all live sessions
pub async fn list_sessions(State(state): State<AppState>) -> Json<SessionListResponse> {
    let sessions: Vec<SessionListEntry> = state
        .sessions()
        .list()
        .into_iter()
        .map(|meta| SessionListEntry {
            session_id: meta.session_id,
            document_count: meta.document_count,
            has_summary: meta.has_summary,
        })
        .collect();

    Json(SessionListResponse {
        success: true,
        count: sessions.len(),
        sessions,
    })
}

/// GET /api/sessions/:id/summary - Summary of a session's content
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SummaryResponse>> {
    let session = state.sessions().get(&id)?;

    Ok(Json(SummaryResponse {
        success: true,
        summary: session.summary,
    }))
}

/// GET /api/sessions/:id/info - Session metadata
pub async fn get_session_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionInfoResponse>> {
    let session = state.sessions().get(&id)?;

    Ok(Json(SessionInfoResponse {
        success: true,
        session_id: session.id.clone(),
        document_count: session.documents.len(),
        total_characters: session.total_characters(),
        summary: session.summary.clone(),
        has_qa_chain: session.index.chunk_count() > 0,
    }))
}

/// DELETE /api/sessions/:id - Remove a session
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteSessionResponse>> {
    if !state.sessions().delete(&id) {
        return Err(Error::SessionNotFound(id));
    }

    Ok(Json(DeleteSessionResponse {
        success: true,
        message: format!("Session {} deleted successfully", id),
    }))
}
