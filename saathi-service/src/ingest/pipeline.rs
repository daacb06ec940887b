//! Upload validation and text assembly for every ingestion endpoint.

use crate::config::IngestLimits;
use crate::ingest::extractor::ExtractorRegistry;
use crate::ingest::file_kind::{FileCategory, FileKind, UploadedFile};
use crate::ingest::normalize::{normalize_text, significant_chars};
use crate::services::metrics::{record_ingested_file, record_ocr_fallback};
use crate::services::Assistant;
use serde::Serialize;
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

const KIB: usize = 1024;
const MIB: usize = 1024 * KIB;

/// Client-facing rejections. Every variant renders as a 400.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("No files provided")]
    NoFiles,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Maximum {0} document files allowed (PDF/Word/TXT)")]
    TooManyDocuments(usize),

    #[error("Maximum {0} image files allowed")]
    TooManyImages(usize),

    #[error("File too large: {0} (max {})", display_size(*.1))]
    FileTooLarge(String, usize),

    #[error("Could not extract text from any of the provided files.")]
    NothingExtracted,

    #[error("Only .txt and .pdf files are supported")]
    NotTextOrPdf,

    #[error("Only .pdf files are supported")]
    NotPdf,

    #[error("Could not extract text from the file. The file may be empty or contain only images.")]
    EmptyDocument,

    #[error("Unsupported audio format. Please use MP3, WAV, WEBM, OGG, or M4A.")]
    UnsupportedAudio,

    #[error("Audio file too large. Maximum size is {}.", display_size(*.0))]
    AudioTooLarge(usize),

    #[error("Could not transcribe the audio. Please ensure the audio has clear speech.")]
    EmptyTranscription,
}

/// Whole units print bare ("20MB"); other sizes keep one decimal.
fn display_size(bytes: usize) -> String {
    let (unit, suffix) = match bytes {
        b if b >= MIB => (MIB, "MB"),
        b if b >= KIB => (KIB, "KB"),
        b => return format!("{} bytes", b),
    };
    if bytes % unit == 0 {
        format!("{}{}", bytes / unit, suffix)
    } else {
        format!("{:.1}{}", bytes as f64 / unit as f64, suffix)
    }
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

/// One file's contribution to the document context.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFile {
    pub file_name: String,
    pub file_type: FileCategory,
    pub text: String,
    pub file_size: usize,
}

#[derive(Debug, Clone)]
pub struct ParsedBatch {
    pub text: String,
    pub files: Vec<ParsedFile>,
    pub total_files: usize,
    pub document_count: usize,
    pub image_count: usize,
}

#[derive(Clone)]
pub struct IngestPipeline {
    assistant: Assistant,
    extractors: Arc<ExtractorRegistry>,
    limits: IngestLimits,
}

impl IngestPipeline {
    pub fn new(assistant: Assistant, extractors: ExtractorRegistry, limits: IngestLimits) -> Self {
        Self {
            assistant,
            extractors: Arc::new(extractors),
            limits,
        }
    }

    pub fn limits(&self) -> &IngestLimits {
        &self.limits
    }

    /// Validate a batch, then build one context from documents (in upload
    /// order) followed by images.
    pub async fn parse_files(&self, files: Vec<UploadedFile>) -> Result<ParsedBatch, AppError> {
        if files.is_empty() {
            return Err(IngestError::NoFiles.into());
        }

        let total_files = files.len();
        let mut documents = Vec::new();
        let mut images = Vec::new();

        for file in files {
            match file.kind() {
                Some(kind) if kind.category() == FileCategory::Document => {
                    documents.push((file, kind))
                }
                Some(FileKind::Image) => images.push(file),
                _ => return Err(IngestError::UnsupportedFileType(file.file_name).into()),
            }
        }

        if documents.len() > self.limits.max_document_files {
            return Err(IngestError::TooManyDocuments(self.limits.max_document_files).into());
        }
        if images.len() > self.limits.max_image_files {
            return Err(IngestError::TooManyImages(self.limits.max_image_files).into());
        }

        let oversized = documents
            .iter()
            .map(|(file, _)| file)
            .chain(images.iter())
            .find(|file| file.size() > self.limits.max_file_bytes);
        if let Some(file) = oversized {
            return Err(IngestError::FileTooLarge(
                file.file_name.clone(),
                self.limits.max_file_bytes,
            )
            .into());
        }

        let document_count = documents.len();
        let image_count = images.len();
        let mut parsed = Vec::with_capacity(total_files);
        let mut context = String::new();

        for (file, kind) in &documents {
            let text = self.document_text(file, *kind).await?;
            if text.is_empty() {
                tracing::warn!(file_name = %file.file_name, "No text extracted from document");
                continue;
            }
            context.push_str(&format!("\n\n--- Document: {} ---\n\n{}", file.file_name, text));
            parsed.push(parsed_file(file, FileCategory::Document, text));
        }

        for file in &images {
            record_ingested_file(FileKind::Image.as_str());
            let text = normalize_text(
                &self
                    .assistant
                    .ocr(file.mime_type(), file.bytes.to_vec())
                    .await?,
            );
            if text.is_empty() {
                tracing::warn!(file_name = %file.file_name, "No text recognised in image");
                continue;
            }
            context.push_str(&format!("\n\n--- Image: {} ---\n\n{}", file.file_name, text));
            parsed.push(parsed_file(file, FileCategory::Image, text));
        }

        let text = context.trim().to_string();
        if text.is_empty() || parsed.is_empty() {
            return Err(IngestError::NothingExtracted.into());
        }

        tracing::info!(
            total_files = total_files,
            document_count = document_count,
            image_count = image_count,
            context_length = text.len(),
            "Files parsed"
        );

        Ok(ParsedBatch {
            text,
            files: parsed,
            total_files,
            document_count,
            image_count,
        })
    }

    /// A single `.txt` or `.pdf` file.
    pub async fn parse_single(&self, file: &UploadedFile) -> Result<String, AppError> {
        let kind = match file.kind() {
            Some(kind @ (FileKind::PlainText | FileKind::Pdf)) => kind,
            _ => return Err(IngestError::NotTextOrPdf.into()),
        };
        self.check_file_size(file)?;

        let text = self.document_text(file, kind).await?;
        if text.is_empty() {
            return Err(IngestError::EmptyDocument.into());
        }
        Ok(text)
    }

    /// A single `.pdf` file; an empty result is returned as-is.
    pub async fn extract_pdf(&self, file: &UploadedFile) -> Result<String, AppError> {
        if file.kind() != Some(FileKind::Pdf) {
            return Err(IngestError::NotPdf.into());
        }
        self.check_file_size(file)?;
        self.document_text(file, FileKind::Pdf).await
    }

    pub async fn transcribe(&self, file: &UploadedFile) -> Result<String, AppError> {
        if file.kind() != Some(FileKind::Audio) {
            return Err(IngestError::UnsupportedAudio.into());
        }
        if file.size() > self.limits.max_audio_bytes {
            return Err(IngestError::AudioTooLarge(self.limits.max_audio_bytes).into());
        }

        tracing::info!(
            file_name = %file.file_name,
            file_size = file.size(),
            mime_type = file.mime_type(),
            "Transcribing audio"
        );
        record_ingested_file(FileKind::Audio.as_str());

        let text = self
            .assistant
            .transcribe(file.mime_type(), file.bytes.to_vec())
            .await?
            .trim()
            .to_string();
        if text.is_empty() {
            return Err(IngestError::EmptyTranscription.into());
        }
        Ok(text)
    }

    fn check_file_size(&self, file: &UploadedFile) -> Result<(), AppError> {
        if file.size() > self.limits.max_file_bytes {
            return Err(IngestError::FileTooLarge(
                file.file_name.clone(),
                self.limits.max_file_bytes,
            )
            .into());
        }
        Ok(())
    }

    /// Normalised text of a document, OCR'ing PDFs without a usable text layer.
    async fn document_text(&self, file: &UploadedFile, kind: FileKind) -> Result<String, AppError> {
        record_ingested_file(kind.as_str());

        let extractor = self.extractors.find_extractor(kind).ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!("No extractor registered for {}", kind))
        })?;

        let native = match extractor.extract(file).await {
            Ok(text) => Some(normalize_text(&text)),
            Err(e) => {
                tracing::warn!(file_name = %file.file_name, error = %e, "Native extraction failed");
                None
            }
        };

        if kind != FileKind::Pdf {
            return Ok(native.unwrap_or_default());
        }

        match native {
            Some(text) if significant_chars(&text) >= self.limits.scanned_pdf_min_chars => Ok(text),
            native => {
                tracing::info!(
                    file_name = %file.file_name,
                    native_chars = native.as_deref().map(significant_chars).unwrap_or(0),
                    threshold = self.limits.scanned_pdf_min_chars,
                    "PDF looks scanned, falling back to OCR"
                );
                record_ocr_fallback();
                let text = self
                    .assistant
                    .ocr(file.mime_type(), file.bytes.to_vec())
                    .await?;
                Ok(normalize_text(&text))
            }
        }
    }
}

fn parsed_file(file: &UploadedFile, file_type: FileCategory, text: String) -> ParsedFile {
    ParsedFile {
        file_name: file.file_name.clone(),
        file_type,
        text,
        file_size: file.size(),
    }
}
