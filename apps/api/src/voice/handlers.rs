use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::voice::{CommandContext, VoiceCommand};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// POST /api/v1/voice/classify
///
/// Classifies text against an empty context, with no session attached.
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<VoiceCommand>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let command = state
        .classifier
        .classify(&request.text, &CommandContext::default());
    Ok(Json(command))
}
