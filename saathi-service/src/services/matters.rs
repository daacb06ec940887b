//! Read-only matter registry.

use crate::models::Matter;
use service_core::error::AppError;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MatterRegistry {
    matters: Arc<Vec<Matter>>,
}

impl Default for MatterRegistry {
    fn default() -> Self {
        Self::new(Matter::seed())
    }
}

impl MatterRegistry {
    pub fn new(matters: Vec<Matter>) -> Self {
        Self {
            matters: Arc::new(matters),
        }
    }

    /// Load matters from a JSON array file. Ids must be unique.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path).await.map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Failed to read matters file {}: {}",
                path.display(),
                e
            ))
        })?;

        let matters: Vec<Matter> = serde_json::from_slice(&raw).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Invalid matters file {}: {}",
                path.display(),
                e
            ))
        })?;

        {
            let mut seen = HashSet::new();
            if let Some(dup) = matters.iter().find(|m| !seen.insert(m.id.as_str())) {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "Duplicate matter id {:?} in {}",
                    dup.id,
                    path.display()
                )));
            }
        }

        tracing::info!(path = %path.display(), count = matters.len(), "Loaded matters");
        Ok(Self::new(matters))
    }

    pub fn list(&self) -> &[Matter] {
        &self.matters
    }

    pub fn get(&self, id: &str) -> Option<&Matter> {
        self.matters.iter().find(|m| m.id == id)
    }
}
