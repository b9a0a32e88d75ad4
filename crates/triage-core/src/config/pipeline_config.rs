use serde::{Deserialize, Serialize};

use super::{defaults, ensure_min};
use crate::errors::ConfigError;

/// Which pipeline stages run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub clustering_enabled: bool,
    pub kb_enabled: bool,
    /// Ask the explainer collaborator for a per-cluster analysis.
    pub llm_enabled: bool,
    /// Post knowledge-base recommendations back as comments.
    pub push_enabled: bool,
    /// Pull `[ERROR]` blocks out of attachment logs and add them to match queries.
    pub log_extraction_enabled: bool,
    /// Knowledge matches included in each explainer prompt.
    pub max_prompt_matches: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            clustering_enabled: defaults::DEFAULT_CLUSTERING_ENABLED,
            kb_enabled: defaults::DEFAULT_KB_ENABLED,
            llm_enabled: defaults::DEFAULT_LLM_ENABLED,
            push_enabled: defaults::DEFAULT_PUSH_ENABLED,
            log_extraction_enabled: defaults::DEFAULT_LOG_EXTRACTION_ENABLED,
            max_prompt_matches: defaults::DEFAULT_MAX_PROMPT_MATCHES,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_min("pipeline.max_prompt_matches", self.max_prompt_matches, 1)
    }
}
