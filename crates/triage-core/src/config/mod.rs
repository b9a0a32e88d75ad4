//! Configuration structs, loaded once at the boundary and passed down explicitly.

mod clustering_config;
pub mod defaults;
mod knowledge_config;
mod matcher_config;
mod observability_config;
mod pipeline_config;
mod tfidf_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use clustering_config::ClusteringConfig;
pub use knowledge_config::KnowledgeConfig;
pub use matcher_config::MatcherConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use tfidf_config::TfIdfConfig;

use crate::errors::ConfigError;

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub clustering: ClusteringConfig,
    pub matcher: MatcherConfig,
    pub pipeline: PipelineConfig,
    pub knowledge: KnowledgeConfig,
    pub observability: ObservabilityConfig,
}

impl TriageConfig {
    /// Parse from a TOML string. Missing sections and fields take defaults.
    /// The result is validated before it is returned.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clustering.validate()?;
        self.matcher.validate()?;
        self.pipeline.validate()?;
        self.knowledge.validate()?;
        Ok(())
    }
}

/// Check `low <= value <= high`, rejecting NaN.
pub(crate) fn ensure_range(
    name: &'static str,
    value: f64,
    low: f64,
    high: f64,
) -> Result<(), ConfigError> {
    if value.is_nan() || value < low || value > high {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            range: format!("[{low}, {high}]"),
        });
    }
    Ok(())
}

pub(crate) fn ensure_min(name: &'static str, value: usize, min: usize) -> Result<(), ConfigError> {
    if value < min {
        return Err(ConfigError::TooSmall { name, value, min });
    }
    Ok(())
}
