use crate::dtos::TranscriptionResponse;
use crate::handlers::files::read_single_file;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

pub async fn transcribe_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let file = read_single_file(&mut multipart, "audio", "No audio file provided").await?;
    let text = state.ingest.transcribe(&file).await?;

    Ok(Json(TranscriptionResponse {
        text,
        file_size: file.size(),
        file_name: file.file_name,
        duration: None,
        success: true,
    }))
}
