use serde::{Deserialize, Serialize};

/// A case the user is working on, as shown on the matters dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matter {
    pub id: String,
    pub title: String,
    pub court: String,
    pub stage: String,
    pub parties: String,
    pub next_hearing: String,
    pub last_order: String,
}

impl Matter {
    /// Built-in matters served when no matters file is configured.
    pub fn seed() -> Vec<Matter> {
        vec![
            Matter {
                id: "1".to_string(),
                title: "ABC Pvt. Ltd. v. Union of India".to_string(),
                court: "Supreme Court of India".to_string(),
                stage: "SLP (Civil)".to_string(),
                parties: "ABC Pvt. Ltd. vs Union of India".to_string(),
                next_hearing: "12 Oct 2025".to_string(),
                last_order: "22 Sep 2025".to_string(),
            },
            Matter {
                id: "2".to_string(),
                title: "XYZ Industries v. State of Maharashtra".to_string(),
                court: "Supreme Court of India".to_string(),
                stage: "Civil Appeal".to_string(),
                parties: "XYZ Industries vs State of Maharashtra".to_string(),
                next_hearing: "18 Oct 2025".to_string(),
                last_order: "30 Sep 2025".to_string(),
            },
        ]
    }
}
