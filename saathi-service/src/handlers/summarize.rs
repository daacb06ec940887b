use crate::dtos::{SummarizeRequest, SummarizeResponse};
use crate::prompts::SummaryKind;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;

pub async fn summarize(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (text, summary_type) = match (payload.text, payload.summary_type) {
        (Some(text), Some(kind)) if !text.trim().is_empty() && !kind.trim().is_empty() => {
            (text, kind)
        }
        _ => return Err(AppError::bad_request("Missing input")),
    };

    let kind: SummaryKind = summary_type.parse().map_err(AppError::bad_request)?;
    let result = state.assistant.summarize(kind, &text).await?;

    Ok(Json(SummarizeResponse { result }))
}
