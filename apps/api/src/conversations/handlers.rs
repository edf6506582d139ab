use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conversations::store::open_or_create_conversation;
use crate::errors::AppError;
use crate::mentors::store::fetch_mentor_availability;
use crate::models::conversation::ConversationRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartConversationRequest {
    pub student_id: Uuid,
    pub mentor_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct StartConversationResponse {
    pub conversation: ConversationRow,
}

/// POST /api/v1/conversations
pub async fn handle_start_conversation(
    State(state): State<AppState>,
    Json(req): Json<StartConversationRequest>,
) -> Result<Json<StartConversationResponse>, AppError> {
    validate_participants(&req)?;

    let availability = fetch_mentor_availability(&state.db, req.mentor_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Mentor {} not found", req.mentor_id)))?;
    ensure_available(availability)?;

    let conversation = open_or_create_conversation(&state.db, req.student_id, req.mentor_id).await?;
    Ok(Json(StartConversationResponse { conversation }))
}

fn validate_participants(req: &StartConversationRequest) -> Result<(), AppError> {
    if req.student_id == req.mentor_id {
        return Err(AppError::Validation(
            "student_id and mentor_id must differ".to_string(),
        ));
    }
    Ok(())
}

/// A missing flag counts as available; only an explicit `false` blocks.
fn ensure_available(availability: Option<bool>) -> Result<(), AppError> {
    match availability {
        Some(false) => Err(AppError::Conflict(
            "This mentor is currently unavailable.".to_string(),
        )),
        _ => Ok(()),
    }
}
