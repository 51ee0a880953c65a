//! API routes for the document Q&A server

pub mod context;
pub mod query;
pub mod sessions;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Ingestion - larger body limit for file uploads
        .route(
            "/upload",
            post(upload::upload_file).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/upload-json", post(upload::upload_json))
        // Question answering
        .route("/query", post(query::query_document))
        .route("/search-web", post(query::search_web))
        // Adding context to existing sessions
        .route(
            "/add-context",
            post(context::add_context_file).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/add-context-json", post(context::add_context_json))
        // Session management
        .route("/sessions", get(sessions::list_sessions))
        .route("/sessions/:id/summary", get(sessions::get_summary))
        .route("/sessions/:id/info", get(sessions::get_session_info))
        .route("/sessions/:id", delete(sessions::delete_session))
}
