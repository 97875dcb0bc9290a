//! Axum route handlers for resume analysis and ad hoc questions.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::builder::{build_analysis_prompt, build_query_prompt, AnalysisType};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub analysis_type: AnalysisType,
}

impl AnalysisRequest {
    /// Rejects requests that must never reach the completion service.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.resume_text.is_empty() {
            return Err(AppError::Validation("Resume text is required".to_string()));
        }

        let has_job_description = self
            .job_description
            .as_deref()
            .is_some_and(|jd| !jd.trim().is_empty());
        if self.analysis_type.requires_job_description() && !has_job_description {
            return Err(AppError::Validation(format!(
                "Job description is required for {} analysis",
                self.analysis_type.as_str()
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub response: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze-resume
///
/// Validates the request, renders the selected template and returns the
/// model's answer verbatim.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    request.validate()?;

    let prompt = build_analysis_prompt(
        request.analysis_type,
        &request.resume_text,
        request.job_description.as_deref(),
    );

    info!(
        analysis_type = request.analysis_type.as_str(),
        prompt_chars = prompt.len(),
        "Running resume analysis"
    );
    let analysis = state.completion.complete(&prompt).await?;

    Ok(Json(AnalysisResponse { analysis }))
}

/// POST /custom-query
///
/// Answers a free-text question about the supplied resume.
pub async fn handle_custom_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    let prompt = build_query_prompt(&request.query, &request.resume_text);

    info!(query_chars = request.query.len(), "Answering custom query");
    let response = state.completion.complete(&prompt).await?;

    Ok(Json(QueryResponse { response }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(resume: &str, jd: Option<&str>, kind: AnalysisType) -> AnalysisRequest {
        AnalysisRequest {
            resume_text: resume.to_string(),
            job_description: jd.map(String::from),
            analysis_type: kind,
        }
    }

    #[test]
    fn test_empty_resume_is_rejected_regardless_of_other_fields() {
        for kind in [
            AnalysisType::About,
            AnalysisType::Improve,
            AnalysisType::Keywords,
            AnalysisType::Percentage,
        ] {
            let err = request("", Some("Rust engineer"), kind)
                .validate()
                .unwrap_err();
            assert_eq!(err.to_string(), "Resume text is required");
        }
    }

    #[test]
    fn test_whitespace_resume_is_forwarded() {
        assert!(request("   ", None, AnalysisType::About).validate().is_ok());
    }

    #[test]
    fn test_percentage_without_job_description_is_rejected() {
        let err = request("Jane Doe", Some(""), AnalysisType::Percentage)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Job description is required for percentage analysis"
        );
    }

    #[test]
    fn test_keywords_without_job_description_is_rejected() {
        let err = request("Jane Doe", None, AnalysisType::Keywords)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Job description is required for keywords analysis"
        );
    }

    #[test]
    fn test_about_and_improve_do_not_need_job_description() {
        assert!(request("Jane Doe", None, AnalysisType::About)
            .validate()
            .is_ok());
        assert!(request("Jane Doe", Some(" "), AnalysisType::Improve)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let req: AnalysisRequest = serde_json::from_str(r#"{"resume_text": "Jane"}"#).unwrap();
        assert_eq!(req.analysis_type, AnalysisType::About);
        assert!(req.job_description.is_none());

        let req: AnalysisRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_request_deserializes_non_string_type_as_about() {
        let req: AnalysisRequest =
            serde_json::from_str(r#"{"resume_text": "Jane", "analysis_type": true}"#).unwrap();
        assert_eq!(req.analysis_type, AnalysisType::About);
    }

    #[test]
    fn test_request_deserializes_unknown_type_as_about() {
        let req: AnalysisRequest = serde_json::from_str(
            r#"{"resume_text": "Jane", "job_description": null, "analysis_type": "haiku"}"#,
        )
        .unwrap();
        assert_eq!(req.analysis_type, AnalysisType::About);
    }
}
