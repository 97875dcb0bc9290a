//! Axum route handlers for resume upload and lookup.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_text_blocking, is_supported_filename};
use crate::resume::store::StoredResume;
use crate::state::AppState;

/// Multipart part carrying the document.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub text: String,
    pub session_id: Uuid,
}

/// POST /upload-resume
///
/// Accepts a multipart `file` part. The filename is checked before the part
/// body is read, so non-PDF uploads are rejected without buffering them.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !is_supported_filename(&filename) {
            return Err(AppError::Validation(
                "Only PDF files are supported".to_string(),
            ));
        }

        let content = field.bytes().await?;
        let size_bytes = content.len();

        let text = extract_text_blocking(content).await?;
        let session_id = state.resumes.insert(text.clone()).await;
        let stored_sessions = state.resumes.session_count().await;

        info!(
            %session_id,
            size_bytes,
            text_chars = text.chars().count(),
            stored_sessions,
            "Resume uploaded"
        );

        return Ok(Json(UploadResponse {
            message: "Resume uploaded successfully".to_string(),
            text,
            session_id,
        }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

/// GET /resume/:session_id
///
/// Returns the text stored by a previous upload.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<StoredResume>, AppError> {
    state
        .resumes
        .get(session_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume session {session_id}")))
}
