use crate::ingest::file_kind::{FileKind, UploadedFile};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF could not be read: {0}")]
    Pdf(String),

    #[error("Word document could not be read: {0}")]
    Word(String),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for ExtractionError {
    fn from(err: tokio::task::JoinError) -> Self {
        ExtractionError::Task(err.to_string())
    }
}

/// Native (non-AI) text extraction for one family of file kinds.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    fn supported_kinds(&self) -> &[FileKind];

    /// Raw text; normalisation is the caller's job.
    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError>;
}

pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        use crate::ingest::{PdfExtractor, PlainTextExtractor, WordExtractor};

        Self {
            extractors: vec![
                Box::new(PlainTextExtractor),
                Box::new(PdfExtractor),
                Box::new(WordExtractor),
            ],
        }
    }

    pub fn find_extractor(&self, kind: FileKind) -> Option<&dyn TextExtractor> {
        self.extractors
            .iter()
            .find(|e| e.supported_kinds().contains(&kind))
            .map(|b| b.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_document_kind() {
        let registry = ExtractorRegistry::new();
        for kind in [
            FileKind::PlainText,
            FileKind::Pdf,
            FileKind::Word,
            FileKind::LegacyWord,
        ] {
            assert!(registry.find_extractor(kind).is_some(), "no extractor for {kind}");
        }
        assert!(registry.find_extractor(FileKind::Image).is_none());
        assert!(registry.find_extractor(FileKind::Audio).is_none());
    }
}
