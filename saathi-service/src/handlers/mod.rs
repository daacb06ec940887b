pub mod audio;
pub mod chat;
pub mod files;
pub mod health;
pub mod matters;
pub mod summarize;

pub use audio::transcribe_audio;
pub use chat::chat;
pub use files::{parse_files, parse_pdf, upload};
pub use health::{health_check, metrics_handler, readiness_check};
pub use matters::{get_matter, list_matters};
pub use summarize::summarize;
