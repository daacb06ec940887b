use crate::ingest::extractor::{ExtractionError, TextExtractor};
use crate::ingest::file_kind::{FileKind, UploadedFile};
use async_trait::async_trait;
use axum::body::Bytes;
use lopdf::Document;

/// Reads the PDF's own text layer. Scanned PDFs come back (nearly) empty;
/// the ingest pipeline decides whether to OCR them.
#[derive(Default)]
pub struct PdfExtractor;

#[async_trait]
impl TextExtractor for PdfExtractor {
    fn supported_kinds(&self) -> &[FileKind] {
        &[FileKind::Pdf]
    }

    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
        let bytes = file.bytes.clone();
        tokio::task::spawn_blocking(move || extract_pdf_text(&bytes)).await?
    }
}

fn extract_pdf_text(bytes: &Bytes) -> Result<String, ExtractionError> {
    let document = Document::load_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let pages: Vec<u32> = document.get_pages().keys().copied().collect();
    let mut text = String::new();
    let mut failed_pages = 0usize;

    for page in &pages {
        match document.extract_text(&[*page]) {
            Ok(page_text) => {
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str(&page_text);
            }
            Err(e) => {
                failed_pages += 1;
                tracing::debug!(page = page, error = %e, "Skipping unreadable PDF page");
            }
        }
    }

    tracing::debug!(
        page_count = pages.len(),
        failed_pages = failed_pages,
        text_length = text.len(),
        "PDF text layer extracted"
    );

    Ok(text)
}
