//! Axum route handlers for voice sessions.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::JobPosting;
use crate::session::dispatcher::TranscriptAck;
use crate::session::{CommandDispatcher, DispatchOutcome, SessionSnapshot};
use crate::state::AppState;
use crate::voice::{Gesture, TranscriptSegment};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub session: SessionSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct UtteranceRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GestureRequest {
    pub gesture: String,
}

#[derive(Debug, Serialize)]
pub struct GestureResponse {
    /// False when the gesture arrived inside its cooldown window.
    pub accepted: bool,
    pub outcome: Option<DispatchOutcome>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let (session_id, dispatcher) = state.sessions.create().await;
    let session = dispatcher.snapshot().await;
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id,
            session,
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let dispatcher = session(&state, id).await?;
    Ok(Json(dispatcher.snapshot().await))
}

/// DELETE /api/v1/sessions/:id
///
/// Ends a session and drops its state. A pending transcript commit still
/// holding the session finishes against the detached state.
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .remove(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/utterances
///
/// Dispatches an already-committed utterance. A search responds once the
/// pipeline has finished.
pub async fn handle_utterance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UtteranceRequest>,
) -> Result<Json<DispatchOutcome>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let dispatcher = session(&state, id).await?;
    Ok(Json(dispatcher.dispatch_utterance(&request.text).await))
}

/// POST /api/v1/sessions/:id/transcript
///
/// Feeds a speech-to-text segment; the utterance is dispatched in the
/// background after the silence threshold.
pub async fn handle_transcript(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(segment): Json<TranscriptSegment>,
) -> Result<(StatusCode, Json<TranscriptAck>), AppError> {
    let dispatcher = session(&state, id).await?;
    let ack = dispatcher.push_transcript(segment).await;
    Ok((StatusCode::ACCEPTED, Json(ack)))
}

/// POST /api/v1/sessions/:id/gestures
pub async fn handle_gesture(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<GestureRequest>,
) -> Result<Json<GestureResponse>, AppError> {
    let gesture = Gesture::from_label(&request.gesture)
        .ok_or_else(|| AppError::Validation(format!("Unknown gesture '{}'", request.gesture)))?;
    let dispatcher = session(&state, id).await?;
    let outcome = dispatcher.dispatch_gesture(gesture).await;
    Ok(Json(GestureResponse {
        accepted: outcome.is_some(),
        outcome,
    }))
}

/// GET /api/v1/sessions/:id/saved
pub async fn handle_list_saved(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let dispatcher = session(&state, id).await?;
    Ok(Json(dispatcher.saved_jobs().await))
}

/// DELETE /api/v1/sessions/:id/saved/:key
///
/// Removes every saved job whose display key is `key`.
pub async fn handle_remove_saved(
    State(state): State<AppState>,
    Path((id, key)): Path<(Uuid, String)>,
) -> Result<StatusCode, AppError> {
    let dispatcher = session(&state, id).await?;
    if dispatcher.remove_saved(&key).await.is_empty() {
        return Err(AppError::NotFound(format!("Saved job {key} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn session(state: &AppState, id: Uuid) -> Result<Arc<CommandDispatcher>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}
