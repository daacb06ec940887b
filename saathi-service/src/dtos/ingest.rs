use crate::ingest::{ParsedBatch, ParsedFile};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseFilesResponse {
    pub text: String,
    pub files: Vec<ParsedFile>,
    pub total_files: usize,
    pub document_count: usize,
    pub image_count: usize,
    pub success: bool,
}

impl From<ParsedBatch> for ParseFilesResponse {
    fn from(batch: ParsedBatch) -> Self {
        Self {
            text: batch.text,
            files: batch.files,
            total_files: batch.total_files,
            document_count: batch.document_count,
            image_count: batch.image_count,
            success: true,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocumentResponse {
    pub text: String,
    pub file_name: String,
    pub file_size: usize,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionResponse {
    pub text: String,
    pub file_name: String,
    pub file_size: usize,
    /// Always null; audio length is not measured.
    pub duration: Option<f64>,
    pub success: bool,
}
