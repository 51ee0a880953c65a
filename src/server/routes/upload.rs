//! Upload endpoints: create a session from a file, URL, or raw text

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::session::new_session_id;
use crate::types::{
    response::{ContentInput, UploadResponse},
    InputKind,
};

/// File extensions accepted by the upload endpoints
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "gif", "bmp", "tiff"];

/// Check if a filename carries an allowed extension
pub fn allowed_file(filename: &str) -> bool {
    file_extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Lowercased extension of a filename, if any
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Input kind for an allowed upload extension
pub fn kind_for_extension(ext: &str) -> InputKind {
    if ext == "pdf" {
        InputKind::Pdf
    } else {
        InputKind::Image
    }
}

/// Read the first file field out of a multipart body
pub async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::internal(format!("Failed to read multipart field: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        if filename.is_empty() {
            return Err(Error::validation("No file provided"));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::internal(format!("Failed to read file: {}", e)))?;

        return Ok((filename, data.to_vec()));
    }

    Err(Error::validation("No file provided"))
}

/// Write upload bytes to the shared temp directory, named by session id
pub fn temp_upload_path(session_id: &str, filename: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}", session_id, filename))
}

/// POST /api/upload - Upload and process a file (PDF or image)
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let (filename, data) = read_file_field(&mut multipart).await?;

    // Extension whitelist is checked before any backend call
    if !allowed_file(&filename) {
        return Err(Error::validation(format!(
            "Invalid file type. Allowed: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    let session_id = new_session_id();
    let ext = file_extension(&filename).unwrap_or_default();
    let kind = kind_for_extension(&ext);

    let filepath = temp_upload_path(&session_id, &filename);
    tokio::fs::write(&filepath, &data).await?;

    tracing::info!(
        "Processing upload: {} ({} bytes, kind: {})",
        filename,
        data.len(),
        kind.as_str()
    );

    // NOTE: if loading or indexing fails here, the temp file is not removed;
    // the cleanup below only runs on the success path.
    let documents = state
        .loader()
        .load(kind, &filepath.to_string_lossy())
        .await?;
    let summary = state
        .create_session(session_id.clone(), documents, kind.content_kind())
        .await?;

    tokio::fs::remove_file(&filepath).await?;

    Ok(Json(UploadResponse {
        success: true,
        session_id,
        summary,
        content_type: kind.as_str().to_string(),
    }))
}

/// POST /api/upload-json - Create a session from a URL or raw text
pub async fn upload_json(
    State(state): State<AppState>,
    Json(content): Json<ContentInput>,
) -> Result<Json<UploadResponse>> {
    let (kind, value) = match (&content.url, &content.text) {
        (Some(url), _) => (InputKind::Url, url.clone()),
        (None, Some(text)) => (InputKind::Text, text.clone()),
        (None, None) => {
            return Err(Error::validation(
                "Either 'url' or 'text' must be provided",
            ));
        }
    };

    let session_id = new_session_id();
    let documents = state.loader().load(kind, &value).await?;
    let summary = state
        .create_session(session_id.clone(), documents, kind.content_kind())
        .await?;

    Ok(Json(UploadResponse {
        success: true,
        session_id,
        summary,
        content_type: kind.as_str().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_whitelist() {
        assert!(allowed_file("report.pdf"));
        assert!(allowed_file("scan.PNG"));
        assert!(allowed_file("photo.jpeg"));
        assert!(!allowed_file("malware.exe"));
        assert!(!allowed_file("data.csv"));
        assert!(!allowed_file("no_extension"));
        assert!(!allowed_file("trailing_dot."));
    }

    #[test]
    fn kind_routing_by_extension() {
        assert_eq!(kind_for_extension("pdf"), InputKind::Pdf);
        assert_eq!(kind_for_extension("png"), InputKind::Image);
        assert_eq!(kind_for_extension("tiff"), InputKind::Image);
    }

    #[test]
    fn temp_path_is_namespaced_by_session() {
        let path = temp_upload_path("abc123", "scan.png");
        assert!(path.to_string_lossy().ends_with("abc123_scan.png"));
    }
}
