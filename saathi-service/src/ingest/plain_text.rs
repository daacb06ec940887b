use crate::ingest::extractor::{ExtractionError, TextExtractor};
use crate::ingest::file_kind::{FileKind, UploadedFile};
use async_trait::async_trait;

#[derive(Default)]
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    fn supported_kinds(&self) -> &[FileKind] {
        &[FileKind::PlainText]
    }

    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
        let text = String::from_utf8_lossy(&file.bytes);
        // Notepad-style UTF-8 BOM
        Ok(text.trim_start_matches('\u{feff}').to_string())
    }
}
