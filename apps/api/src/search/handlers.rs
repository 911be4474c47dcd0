use axum::{extract::State, Json};

use crate::models::SearchQuery;
use crate::search::SearchResult;
use crate::state::AppState;

/// POST /api/v1/search
///
/// Runs the subagent pipeline for a structured query. Every field is optional.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Json<SearchResult> {
    Json(state.pipeline.search(&query).await)
}
