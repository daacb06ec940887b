use crate::ingest::extractor::{ExtractionError, TextExtractor};
use crate::ingest::file_kind::{FileKind, UploadedFile};
use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX text extraction from the main document part.
///
/// Legacy `.doc` files are attempted the same way, since many are DOCX
/// files with the old extension. Unreadable files yield a placeholder line
/// instead of failing the whole upload.
#[derive(Default)]
pub struct WordExtractor;

#[async_trait]
impl TextExtractor for WordExtractor {
    fn supported_kinds(&self) -> &[FileKind] {
        &[FileKind::Word, FileKind::LegacyWord]
    }

    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
        let bytes = file.bytes.clone();
        let result = tokio::task::spawn_blocking(move || extract_docx_text(&bytes)).await?;
        let legacy = file.kind() == Some(FileKind::LegacyWord);

        match result {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) if legacy => Ok(legacy_placeholder(&file.file_name)),
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!(file_name = %file.file_name, error = %e, "Word extraction failed");
                if legacy {
                    Ok(legacy_placeholder(&file.file_name))
                } else {
                    Ok(format!("[Error extracting text from: {}]", file.file_name))
                }
            }
        }
    }
}

fn legacy_placeholder(file_name: &str) -> String {
    format!(
        "[Old Word format: {} - Please convert to .docx for better support]",
        file_name
    )
}

/// Pull visible text out of a DOCX container.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError::Word(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Word(format!("{}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Word(e.to_string()))?;

    document_xml_to_text(&xml)
}

/// Property blocks whose children describe formatting, not content.
/// `w:tab` inside them is a tab-stop definition.
const PROPERTY_ELEMENTS: [&[u8]; 4] = [b"w:pPr", b"w:rPr", b"w:sectPr", b"w:tabs"];

/// `w:t` runs carry text; paragraph ends, breaks and run-level tabs become
/// whitespace.
fn document_xml_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;
    let mut property_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = true,
                name if PROPERTY_ELEMENTS.contains(&name) => property_depth += 1,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                name if PROPERTY_ELEMENTS.contains(&name) => {
                    property_depth = property_depth.saturating_sub(1)
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" if property_depth == 0 => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let run = e
                    .unescape()
                    .map_err(|err| ExtractionError::Word(err.to_string()))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractionError::Word(format!(
                    "malformed XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }

    Ok(text)
}
