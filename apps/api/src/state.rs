use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;
use crate::resume::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `GeminiClient` in production, an in-process fake in tests.
    pub completion: Arc<dyn CompletionBackend>,
    /// Uploaded resumes, one entry per upload session.
    pub resumes: ResumeStore,
    pub config: Config,
}
