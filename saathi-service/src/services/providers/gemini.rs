//! Gemini AI provider implementation.
//!
//! Calls the `generateContent` REST method. Attachments are sent inline,
//! base64-encoded, which keeps every request self-contained.

use super::{
    FinishReason, GenerationParams, GenerationRequest, Part, ProviderError, ProviderResponse,
    Role, TextProvider, Turn,
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use service_core::observability::TracedClientExt;
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model,
            method
        )
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ProviderError::NotConfigured("Gemini API key not configured".to_string())
            })
    }

    fn build_request(&self, request: &GenerationRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = request.history.iter().map(turn_to_content).collect();
        contents.push(Content {
            role: Some(Role::User.as_str().to_string()),
            parts: request.parts.iter().map(part_to_content).collect(),
        });

        GenerateContentRequest {
            system_instruction: request.system_instruction.as_ref().map(|text| Content {
                role: None,
                parts: vec![ContentPart::Text { text: text.clone() }],
            }),
            contents,
            generation_config: build_generation_config(&request.params),
        }
    }
}

fn turn_to_content(turn: &Turn) -> Content {
    Content {
        role: Some(turn.role.as_str().to_string()),
        parts: turn.parts.iter().map(part_to_content).collect(),
    }
}

fn part_to_content(part: &Part) -> ContentPart {
    match part {
        Part::Text(text) => ContentPart::Text { text: text.clone() },
        Part::InlineData { mime_type, data } => ContentPart::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.clone(),
                data: BASE64.encode(data),
            },
        },
    }
}

/// Build generation config from parameters; `None` when nothing is set.
fn build_generation_config(params: &GenerationParams) -> Option<GenerationConfig> {
    if *params == GenerationParams::default() {
        return None;
    }

    Some(GenerationConfig {
        temperature: params.temperature,
        top_p: params.top_p,
        top_k: params.top_k,
        max_output_tokens: params.max_output_tokens,
    })
}

/// Map a non-2xx Gemini response to a provider error.
fn classify_error(status: StatusCode, retry_after: Option<u64>, body: &str) -> ProviderError {
    if status == StatusCode::TOO_MANY_REQUESTS || body.contains("RESOURCE_EXHAUSTED") {
        return ProviderError::RateLimited(retry_after);
    }

    if status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || (status == StatusCode::BAD_REQUEST
            && (body.contains("API_KEY") || body.contains("API key")))
    {
        return ProviderError::InvalidApiKey;
    }

    ProviderError::ApiError(format!("Gemini API error {}: {}", status, body))
}

/// Only the delta-seconds form is understood; HTTP dates are ignored.
fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

fn finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST") => {
            FinishReason::ContentFilter
        }
        _ => FinishReason::Complete,
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        let api_key = self.api_key()?;
        let body = self.build_request(&request);
        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            history_turns = request.history.len(),
            parts = request.parts.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .traced_post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = retry_after_secs(response.headers());
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, ?retry_after, "Gemini API returned an error");
            return Err(classify_error(status, retry_after, &error_text));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        if let Some(reason) = api_response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            tracing::warn!(block_reason = reason, "Gemini blocked the prompt");
            return Err(ProviderError::ContentFiltered);
        }

        let candidate = api_response.candidates.first();
        let finish_reason = finish_reason(candidate.and_then(|c| c.finish_reason.as_deref()));
        if finish_reason == FinishReason::ContentFilter {
            return Err(ProviderError::ContentFiltered);
        }

        // A candidate may split its answer across several text parts.
        let text = candidate
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| match p {
                        ContentPart::Text { text } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect::<String>()
            })
            .unwrap_or_default();

        let usage = api_response.usage_metadata.unwrap_or_default();

        Ok(ProviderResponse {
            text,
            input_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
            finish_reason,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        self.api_key().map(|_| ())
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    /// Function calls, thoughts and other part kinds we do not consume.
    Other(serde_json::Value),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(api_key: Option<&str>) -> GeminiTextProvider {
        GeminiTextProvider::new(GeminiConfig {
            api_key: api_key.map(str::to_string),
            model: "gemini-2.5-flash".to_string(),
            api_base: "https://example.test/v1beta/".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn api_url_joins_base_model_and_method() {
        assert_eq!(
            provider(Some("k")).api_url("generateContent"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_serializes_history_then_user_turn() {
        let request = GenerationRequest {
            system_instruction: Some("be brief".to_string()),
            history: vec![
                Turn::text(Role::User, "hi"),
                Turn::text(Role::Model, "hello"),
            ],
            parts: vec![Part::inline("image/png", vec![1, 2, 3]), Part::text("read this")],
            params: GenerationParams::chat(),
        };

        let json = serde_json::to_value(provider(Some("k")).build_request(&request)).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][1]["role"], "model");
        assert_eq!(json["contents"][2]["role"], "user");
        assert_eq!(
            json["contents"][2]["parts"][0]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(json["contents"][2]["parts"][0]["inlineData"]["data"], "AQID");
        assert_eq!(json["contents"][2]["parts"][1]["text"], "read this");
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn default_params_omit_generation_config() {
        let json = serde_json::to_value(
            provider(Some("k")).build_request(&GenerationRequest::prompt("x")),
        )
        .unwrap();
        assert!(json.get("generationConfig").is_none());
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn classifies_error_statuses() {
        assert!(matches!(
            classify_error(StatusCode::TOO_MANY_REQUESTS, Some(7), ""),
            ProviderError::RateLimited(Some(7))
        ));
        assert!(matches!(
            classify_error(
                StatusCode::BAD_REQUEST,
                None,
                r#"{"error":{"message":"API key not valid. Please pass a valid API key.","details":[{"reason":"API_KEY_INVALID"}]}}"#
            ),
            ProviderError::InvalidApiKey
        ));
        assert!(matches!(
            classify_error(StatusCode::FORBIDDEN, None, "denied"),
            ProviderError::InvalidApiKey
        ));
        assert!(matches!(
            classify_error(StatusCode::INTERNAL_SERVER_ERROR, None, "boom"),
            ProviderError::ApiError(msg) if msg.contains("boom")
        ));
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let err = provider(None)
            .generate(GenerationRequest::prompt("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
        assert!(provider(None).health_check().await.is_err());
        assert!(provider(Some("k")).health_check().await.is_ok());
    }
}
