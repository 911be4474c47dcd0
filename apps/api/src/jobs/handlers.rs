use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::JobPosting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FetchParams {
    pub role: String,
    pub location: Option<String>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.store.all().to_vec())
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .store
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// GET /api/v1/jobs/fetch?role=&location=
pub async fn handle_fetch_jobs(
    State(state): State<AppState>,
    Query(params): Query<FetchParams>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    if params.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }
    let jobs = state
        .job_source
        .fetch(params.role.trim(), params.location.as_deref())
        .await;
    Ok(Json(jobs))
}
