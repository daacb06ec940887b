//! Model-facing operations used by the handlers and the ingest pipeline.

use crate::prompts::{self, SummaryKind};
use crate::services::metrics::{record_provider_call, record_provider_tokens};
use crate::services::providers::{
    GenerationParams, GenerationRequest, ProviderError, ProviderResponse, TextProvider, Turn,
};
use service_core::error::AppError;
use std::sync::Arc;
use std::time::Instant;

pub const CHAT_ERROR_CONTEXT: &str = "AI processing error";
pub const SUMMARY_ERROR_CONTEXT: &str = "AI processing failed";
pub const TRANSCRIPTION_ERROR_CONTEXT: &str = "Transcription failed";
pub const INGEST_ERROR_CONTEXT: &str = "Failed to parse files";

#[derive(Clone)]
pub struct Assistant {
    provider: Arc<dyn TextProvider>,
}

impl Assistant {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub async fn is_ready(&self) -> bool {
        self.provider.health_check().await.is_ok()
    }

    /// Answer `message` from `doc_text`, continuing the client-held history.
    pub async fn chat(
        &self,
        doc_text: &str,
        message: &str,
        history: Vec<Turn>,
    ) -> Result<String, AppError> {
        let mut request = GenerationRequest::prompt(prompts::contextual_prompt(doc_text, message));
        request.system_instruction = Some(prompts::SYSTEM_INSTRUCTION.to_string());
        request.history = history;
        request.params = GenerationParams::chat();

        tracing::info!(
            doc_length = doc_text.len(),
            history_turns = request.history.len(),
            "Answering document question"
        );

        self.call("chat", request, CHAT_ERROR_CONTEXT).await
    }

    pub async fn summarize(&self, kind: SummaryKind, text: &str) -> Result<String, AppError> {
        tracing::info!(summary_type = %kind, doc_length = text.len(), "Generating summary");
        let request = GenerationRequest::prompt(prompts::summary_prompt(kind, text));
        self.call("summary", request, SUMMARY_ERROR_CONTEXT).await
    }

    /// Read the text out of a scanned PDF or an image.
    pub async fn ocr(&self, mime_type: &str, data: Vec<u8>) -> Result<String, AppError> {
        let request = GenerationRequest::with_attachment(mime_type, data, prompts::OCR_PROMPT);
        self.call("ocr", request, INGEST_ERROR_CONTEXT).await
    }

    pub async fn transcribe(&self, mime_type: &str, data: Vec<u8>) -> Result<String, AppError> {
        let request =
            GenerationRequest::with_attachment(mime_type, data, prompts::TRANSCRIPTION_PROMPT);
        self.call("transcription", request, TRANSCRIPTION_ERROR_CONTEXT)
            .await
    }

    async fn call(
        &self,
        operation: &'static str,
        request: GenerationRequest,
        error_context: &str,
    ) -> Result<String, AppError> {
        let provider = self.provider.name().to_string();
        let started = Instant::now();
        let result: Result<ProviderResponse, ProviderError> = self.provider.generate(request).await;
        let elapsed = started.elapsed();

        match result {
            Ok(response) => {
                record_provider_call(&provider, operation, "success", elapsed);
                record_provider_tokens(&provider, response.input_tokens, response.output_tokens);
                tracing::info!(
                    provider = %provider,
                    operation = operation,
                    input_tokens = response.input_tokens,
                    output_tokens = response.output_tokens,
                    finish_reason = ?response.finish_reason,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Model call completed"
                );
                Ok(response.text)
            }
            Err(e) => {
                record_provider_call(&provider, operation, "error", elapsed);
                tracing::error!(
                    provider = %provider,
                    operation = operation,
                    error = %e,
                    "Model call failed"
                );
                Err(e.into_app_error(error_context))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockTextProvider;
    use crate::services::providers::{Part, Role};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn chat_sends_persona_history_and_framed_question() {
        let provider = Arc::new(MockTextProvider::replying("The appeal was allowed."));
        let assistant = Assistant::new(provider.clone());
        let history = vec![
            Turn::text(Role::User, "Who is the petitioner?"),
            Turn::text(Role::Model, "ABC Pvt. Ltd."),
        ];

        let answer = assistant
            .chat("ORDER TEXT", "What was the outcome?", history.clone())
            .await
            .unwrap();
        assert_eq!(answer, "The appeal was allowed.");

        let sent = &provider.requests()[0];
        assert_eq!(sent.system_instruction.as_deref(), Some(prompts::SYSTEM_INSTRUCTION));
        assert_eq!(sent.history, history);
        assert_eq!(sent.params, GenerationParams::chat());
        assert_eq!(
            sent.parts,
            vec![Part::text(prompts::contextual_prompt("ORDER TEXT", "What was the outcome?"))]
        );
    }

    #[tokio::test]
    async fn ocr_attaches_bytes_before_instruction() {
        let provider = Arc::new(MockTextProvider::replying("scanned"));
        let assistant = Assistant::new(provider.clone());

        assistant.ocr("image/png", vec![1, 2, 3]).await.unwrap();

        let sent = &provider.requests()[0];
        assert_eq!(sent.parts[0], Part::inline("image/png", vec![1, 2, 3]));
        assert_eq!(sent.parts[1], Part::text(prompts::OCR_PROMPT));
        assert!(sent.system_instruction.is_none());
    }

    #[tokio::test]
    async fn failures_carry_operation_context() {
        let provider = Arc::new(MockTextProvider::failing(|| {
            ProviderError::NetworkError("connection reset".into())
        }));
        let assistant = Assistant::new(provider);

        let err = assistant
            .transcribe("audio/mpeg", vec![0; 4])
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("Transcription failed: Network error"));
    }
}
