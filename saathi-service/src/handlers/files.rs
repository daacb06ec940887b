use crate::dtos::{ParseFilesResponse, ParsedDocumentResponse, UploadResponse};
use crate::ingest::UploadedFile;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

/// Every file part sent under `field_name`, in upload order.
pub(crate) async fn read_files(
    multipart: &mut Multipart,
    field_name: &str,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some(field_name) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("unnamed").to_string();
        let bytes = field.bytes().await.map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e))
        })?;
        files.push(UploadedFile::new(file_name, bytes));
    }

    Ok(files)
}

pub(crate) async fn read_single_file(
    multipart: &mut Multipart,
    field_name: &str,
    missing: &str,
) -> Result<UploadedFile, AppError> {
    read_files(multipart, field_name)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::bad_request(missing))
}

pub async fn parse_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let files = read_files(&mut multipart, "files").await?;
    let batch = state.ingest.parse_files(files).await?;
    Ok(Json(ParseFilesResponse::from(batch)))
}

pub async fn parse_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let file = read_single_file(&mut multipart, "file", "No file provided").await?;
    let text = state.ingest.parse_single(&file).await?;

    Ok(Json(ParsedDocumentResponse {
        text,
        file_size: file.size(),
        file_name: file.file_name,
        success: true,
    }))
}

pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let file = read_single_file(&mut multipart, "file", "No file provided").await?;
    let text = state.ingest.extract_pdf(&file).await?;
    Ok(Json(UploadResponse { text }))
}
