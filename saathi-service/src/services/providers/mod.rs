//! AI provider abstractions and implementations.
//!
//! Every model call in the service (chat, summaries, OCR, transcription)
//! goes through [`TextProvider`], so the Gemini backend can be swapped for
//! the mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    /// Carries the upstream `Retry-After` in seconds when one was sent.
    #[error("Rate limited")]
    RateLimited(Option<u64>),

    #[error("Content filtered")]
    ContentFiltered,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl ProviderError {
    /// Convert into the HTTP error shown to the caller. `context` prefixes
    /// failures that have no dedicated message, e.g. "Transcription failed".
    pub fn into_app_error(self, context: &str) -> AppError {
        match self {
            ProviderError::NotConfigured(_) => AppError::Upstream(
                "Gemini API key is not configured. Please set GEMINI_API_KEY.".to_string(),
            ),
            ProviderError::InvalidApiKey => AppError::Unauthorized(anyhow::anyhow!(
                "Invalid API key. Please check your GEMINI_API_KEY."
            )),
            ProviderError::RateLimited(retry_after) => AppError::TooManyRequests(
                "API rate limit exceeded. Please try again in a moment.".to_string(),
                retry_after,
            ),
            other => AppError::Upstream(format!("{}: {}", context, other)),
        }
    }
}

/// Speaker of a conversation turn, using the model's own role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One piece of model input.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    /// Raw bytes (scan, image, audio) sent alongside the prompt.
    InlineData { mime_type: String, data: Vec<u8> },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(text.into())
    }

    pub fn inline(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Part::InlineData {
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(text) => Some(text),
            Part::InlineData { .. } => None,
        }
    }
}

/// A prior turn of the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part::text(text)],
        }
    }
}

/// Generation parameters for AI requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationParams {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub top_k: Option<i32>,
    pub max_output_tokens: Option<i32>,
}

impl GenerationParams {
    /// Low-temperature settings for grounded document Q&A.
    pub fn chat() -> Self {
        Self {
            temperature: Some(0.3),
            top_p: Some(0.8),
            top_k: Some(40),
            max_output_tokens: Some(2048),
        }
    }
}

/// A single generation call: optional system instruction, prior turns and
/// the parts of the new user turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: Option<String>,
    pub history: Vec<Turn>,
    pub parts: Vec<Part>,
    pub params: GenerationParams,
}

impl GenerationRequest {
    /// A one-shot text prompt.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::text(text)],
            ..Default::default()
        }
    }

    /// Bytes plus an instruction, e.g. OCR or transcription.
    pub fn with_attachment(mime_type: impl Into<String>, data: Vec<u8>, instruction: &str) -> Self {
        Self {
            parts: vec![Part::inline(mime_type, data), Part::text(instruction)],
            ..Default::default()
        }
    }
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
    Error,
}

/// Result of a provider response.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub finish_reason: FinishReason,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Short identifier used in logs and metrics.
    fn name(&self) -> &str;

    /// Generate a text response.
    async fn generate(&self, request: GenerationRequest)
        -> Result<ProviderResponse, ProviderError>;

    /// Whether the provider is usable at all (e.g. has credentials).
    async fn health_check(&self) -> Result<(), ProviderError>;
}
