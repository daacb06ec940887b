pub mod chat;
pub mod ingest;
pub mod matters;
pub mod summarize;

pub use chat::{ChatRequest, ChatResponse, ChatTurnDto};
pub use ingest::{ParseFilesResponse, ParsedDocumentResponse, TranscriptionResponse, UploadResponse};
pub use matters::MatterListResponse;
pub use summarize::{SummarizeRequest, SummarizeResponse};
