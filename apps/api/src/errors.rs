use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::llm_client::CompletionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid upload: {}", .0.body_text())]
    Multipart(#[from] MultipartError),

    #[error("Error reading PDF: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Gemini AI error: {0}")]
    Completion(#[from] CompletionError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Extraction(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Body-limit overflows report 413, malformed bodies 400.
            AppError::Multipart(e) => e.status(),
            AppError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, detail) = match &self {
            AppError::Validation(msg) => ("BAD_INPUT", msg.clone()),
            AppError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            AppError::Multipart(_) if self.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                ("PAYLOAD_TOO_LARGE", self.to_string())
            }
            AppError::Multipart(_) => ("BAD_INPUT", self.to_string()),
            AppError::Extraction(e) => {
                tracing::warn!("Rejected upload: {e}");
                ("EXTRACTION_ERROR", self.to_string())
            }
            AppError::Completion(e) => {
                tracing::error!("Completion error: {e}");
                ("COMPLETION_ERROR", self.to_string())
            }
        };

        let body = Json(json!({
            "detail": detail,
            "code": code,
        }));

        (self.status(), body).into_response()
    }
}
