use crate::services::providers::{Role, Turn};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(nested)]
    pub history: Vec<ChatTurnDto>,

    #[serde(default, rename = "docText")]
    pub doc_text: Option<String>,
}

impl ChatRequest {
    /// The question, or `None` when absent or blank.
    pub fn message(&self) -> Option<&str> {
        non_blank(self.message.as_deref())
    }

    pub fn doc_text(&self) -> Option<&str> {
        non_blank(self.doc_text.as_deref())
    }

    /// Clients resend the whole transcript each turn; refuse unbounded ones.
    pub fn check_history_len(&self, max_turns: usize) -> Result<(), ValidationErrors> {
        if self.history.len() <= max_turns {
            return Ok(());
        }
        let mut error = ValidationError::new("length");
        error.message = Some(format!("History may contain at most {} turns", max_turns).into());
        error.add_param("max".into(), &max_turns);
        error.add_param("value".into(), &self.history.len());

        let mut errors = ValidationErrors::new();
        errors.add("history", error);
        Err(errors)
    }

    pub fn history_turns(&self) -> Vec<Turn> {
        self.history
            .iter()
            .map(|turn| Turn::text(turn.role, turn.content.clone()))
            .collect()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatTurnDto {
    pub role: Role,
    #[validate(length(min = 1, message = "History entries must have content"))]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub success: bool,
}
