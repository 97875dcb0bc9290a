pub mod health;
pub mod page;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::analysis::handlers as analysis;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(page::handle_index))
        .route("/health", get(health::health_handler))
        // Resume intake
        .route(
            "/upload-resume",
            post(resume::handle_upload).layer(upload_limit),
        )
        .route("/resume/:session_id", get(resume::handle_get_resume))
        // Analysis
        .route("/analyze-resume", post(analysis::handle_analyze))
        .route("/custom-query", post(analysis::handle_custom_query))
        .nest_service("/static", assets)
        .with_state(state)
}
