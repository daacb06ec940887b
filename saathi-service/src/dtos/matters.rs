use crate::models::Matter;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MatterListResponse {
    pub matters: Vec<Matter>,
}
