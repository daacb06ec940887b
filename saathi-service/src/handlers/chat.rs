use crate::dtos::{ChatRequest, ChatResponse};
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;
use validator::Validate;

pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    let message = payload
        .message()
        .ok_or_else(|| AppError::bad_request("Message is required"))?;
    let doc_text = payload.doc_text().ok_or_else(|| {
        AppError::bad_request("Please provide a document context before asking questions.")
    })?;
    payload.validate()?;
    payload.check_history_len(state.config.limits.max_history_turns)?;

    let response = state
        .assistant
        .chat(doc_text, message, payload.history_turns())
        .await?;

    Ok(Json(ChatResponse {
        response,
        success: true,
    }))
}
