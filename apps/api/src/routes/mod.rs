pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::search::handlers as search;
use crate::session::handlers as sessions;
use crate::state::AppState;
use crate::voice::handlers as voice;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job Store
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/fetch", get(jobs::handle_fetch_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Search pipeline
        .route("/api/v1/search", post(search::handle_search))
        // Intent classifier
        .route("/api/v1/voice/classify", post(voice::handle_classify))
        // Sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/utterances",
            post(sessions::handle_utterance),
        )
        .route(
            "/api/v1/sessions/:id/transcript",
            post(sessions::handle_transcript),
        )
        .route(
            "/api/v1/sessions/:id/gestures",
            post(sessions::handle_gesture),
        )
        .route("/api/v1/sessions/:id/saved", get(sessions::handle_list_saved))
        .route(
            "/api/v1/sessions/:id/saved/:key",
            delete(sessions::handle_remove_saved),
        )
        .with_state(state)
}
