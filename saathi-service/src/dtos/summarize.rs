use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "type")]
    pub summary_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub result: String,
}
