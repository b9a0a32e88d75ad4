use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Knowledge-base location and cache sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Directory scanned recursively for `*.yaml` / `*.yml` entry files.
    pub kb_path: String,
    /// Maximum number of loaded knowledge bases kept by the cache.
    pub cache_capacity: u64,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            kb_path: defaults::DEFAULT_KB_PATH.to_string(),
            cache_capacity: defaults::DEFAULT_KB_CACHE_CAPACITY,
        }
    }
}

impl KnowledgeConfig {
    /// A zero-capacity cache would reload the knowledge base on every lookup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::TooSmall {
                name: "knowledge.cache_capacity",
                value: 0,
                min: 1,
            });
        }
        if self.kb_path.trim().is_empty() {
            return Err(ConfigError::Blank {
                name: "knowledge.kb_path",
            });
        }
        Ok(())
    }
}
