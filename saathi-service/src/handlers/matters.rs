use crate::dtos::MatterListResponse;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

pub async fn list_matters(State(state): State<AppState>) -> impl IntoResponse {
    Json(MatterListResponse {
        matters: state.matters.list().to_vec(),
    })
}

pub async fn get_matter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .matters
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Matter not found")))
}
