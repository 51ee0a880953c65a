//! Add-context endpoints: append content to an existing session

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::answer;
use crate::error::{Error, Result};
use crate::server::routes::upload::{
    allowed_file, file_extension, kind_for_extension, temp_upload_path, ALLOWED_EXTENSIONS,
};
use crate::server::state::AppState;
use crate::types::{
    response::{AddContextInput, AddContextResponse, AddedContent},
    InputKind,
};

/// POST /api/add-context - Append a file (PDF or image) to a session
pub async fn add_context_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AddContextResponse>> {
    let mut session_id: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::internal(format!("Failed to read multipart field: {}", e)))?
    {
        if let Some(filename) = field.file_name().map(|s| s.to_string()) {
            if filename.is_empty() {
                return Err(Error::validation("No file provided"));
            }
            let data = field
                .bytes()
                .await
                .map_err(|e| Error::internal(format!("Failed to read file: {}", e)))?;
            file = Some((filename, data.to_vec()));
        } else if field.name() == Some("session_id") {
            let value = field
                .text()
                .await
                .map_err(|e| Error::internal(format!("Failed to read session_id: {}", e)))?;
            session_id = Some(value);
        }
    }

    let session_id = session_id.ok_or_else(|| Error::validation("session_id is required"))?;
    let (filename, data) = file.ok_or_else(|| Error::validation("No file provided"))?;

    // Session existence is checked before touching the file
    if !state.sessions().contains(&session_id) {
        return Err(Error::SessionNotFound(session_id));
    }

    if !allowed_file(&filename) {
        return Err(Error::validation(format!(
            "Invalid file type. Allowed: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    let ext = file_extension(&filename).unwrap_or_default();
    let kind = kind_for_extension(&ext);

    let filepath = temp_upload_path(&session_id, &filename);
    tokio::fs::write(&filepath, &data).await?;

    tracing::info!(
        "Adding {} to session {}: {} bytes",
        filename,
        session_id,
        data.len()
    );

    // NOTE: as with /upload, a failure between here and the cleanup below
    // leaves the temp file behind.
    let documents = state
        .loader()
        .load(kind, &filepath.to_string_lossy())
        .await?;
    let preview = answer::preview(
        &documents,
        &format!("{} file: {}", kind.as_str(), filename),
    );
    let summary = state.extend_session(&session_id, documents).await?;

    tokio::fs::remove_file(&filepath).await?;

    Ok(Json(AddContextResponse {
        success: true,
        summary,
        added_content: AddedContent {
            content_type: kind.as_str().to_string(),
            name: filename,
            preview,
        },
    }))
}

/// POST /api/add-context-json - Append a URL or raw text to a session
pub async fn add_context_json(
    State(state): State<AppState>,
    Json(input): Json<AddContextInput>,
) -> Result<Json<AddContextResponse>> {
    if input.session_id.is_empty() {
        return Err(Error::validation("session_id is required"));
    }
    if !state.sessions().contains(&input.session_id) {
        return Err(Error::SessionNotFound(input.session_id));
    }

    let (kind, value, label, name) = match (&input.url, &input.text) {
        (Some(url), _) => (
            InputKind::Url,
            url.clone(),
            format!("URL: {}", url),
            url.clone(),
        ),
        (None, Some(text)) => (
            InputKind::Text,
            text.clone(),
            "Text content".to_string(),
            "Custom text".to_string(),
        ),
        (None, None) => {
            return Err(Error::validation(
                "Either 'url' or 'text' must be provided",
            ));
        }
    };

    let documents = state.loader().load(kind, &value).await?;
    let preview = answer::preview(&documents, &label);
    let summary = state.extend_session(&input.session_id, documents).await?;

    Ok(Json(AddContextResponse {
        success: true,
        summary,
        added_content: AddedContent {
            content_type: kind.as_str().to_string(),
            name,
            preview,
        },
    }))
}
