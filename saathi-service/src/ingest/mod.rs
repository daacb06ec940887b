//! File ingestion: classification, native text extraction, OCR fallback
//! and the validation rules of the upload endpoints.

pub mod extractor;
pub mod file_kind;
pub mod normalize;
pub mod pdf;
pub mod pipeline;
pub mod plain_text;
pub mod word;

pub use extractor::{ExtractionError, ExtractorRegistry, TextExtractor};
pub use file_kind::{classify, mime_type_for, FileCategory, FileKind, UploadedFile};
pub use normalize::normalize_text;
pub use pdf::PdfExtractor;
pub use pipeline::{IngestError, IngestPipeline, ParsedBatch, ParsedFile};
pub use plain_text::PlainTextExtractor;
pub use word::WordExtractor;
