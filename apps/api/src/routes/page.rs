use axum::{extract::State, http::StatusCode, response::Html};
use tracing::warn;

use crate::state::AppState;

const MISSING_PAGE: &str = "<h1>Error: index.html not found in static directory</h1>";

/// GET /
///
/// Serves `index.html` from the static directory. A missing page degrades to
/// an inline error page instead of failing the request.
pub async fn handle_index(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let path = state.config.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => (StatusCode::OK, Html(html)),
        Err(e) => {
            warn!(path = %path.display(), "Index page unavailable: {e}");
            (StatusCode::NOT_FOUND, Html(MISSING_PAGE.to_string()))
        }
    }
}
