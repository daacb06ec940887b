//! Mock provider implementation for testing.

use super::{
    FinishReason, GenerationRequest, ProviderError, ProviderResponse, TextProvider,
};
use async_trait::async_trait;
use std::sync::Mutex;

type ErrorFactory = Box<dyn Fn() -> ProviderError + Send + Sync>;

enum Behavior {
    /// Reply "Mock response for: <last text part>".
    Echo,
    Reply(String),
    Fail(ErrorFactory),
}

/// Mock text provider for testing.
///
/// Records every request so tests can assert on prompts and attachments.
pub struct MockTextProvider {
    behavior: Behavior,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockTextProvider {
    pub fn echo() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(text.into()))
    }

    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> ProviderError + Send + Sync + 'static,
    {
        Self::with_behavior(Behavior::Fail(Box::new(make_error)))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        let prompt = request
            .parts
            .iter()
            .rev()
            .find_map(|p| p.as_text())
            .unwrap_or_default()
            .to_string();

        if let Ok(mut guard) = self.requests.lock() {
            guard.push(request);
        }

        let text = match &self.behavior {
            Behavior::Echo => format!("Mock response for: {}", prompt),
            Behavior::Reply(text) => text.clone(),
            Behavior::Fail(make_error) => return Err(make_error()),
        };

        Ok(ProviderResponse {
            text,
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: 10,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.behavior {
            Behavior::Fail(make_error) => match make_error() {
                err @ ProviderError::NotConfigured(_) => Err(err),
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }
}
