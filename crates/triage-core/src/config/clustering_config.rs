use serde::{Deserialize, Serialize};

use super::{defaults, ensure_min, TfIdfConfig};
use crate::errors::ConfigError;

/// Failure clustering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Minimum cosine similarity for two failures to share a cluster, in (0, 1].
    pub similarity_threshold: f64,
    /// Vectorizer used to embed failure documents.
    pub tfidf: TfIdfConfig,
    /// Maximum length of a cluster label in characters.
    pub max_label_length: usize,
    /// Characters of the normalized representative message hashed into the cluster id.
    pub message_pattern_length: usize,
    /// Number of leading trace lines cached on each cluster.
    pub trace_snippet_lines: usize,
}

impl ClusteringConfig {
    /// Config with the given threshold and defaults elsewhere.
    pub fn with_threshold(similarity_threshold: f64) -> Self {
        Self {
            similarity_threshold,
            ..Self::default()
        }
    }

    /// Dendrogram cut height: `1 - similarity_threshold`.
    pub fn distance_threshold(&self) -> f64 {
        1.0 - self.similarity_threshold
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.similarity_threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "clustering.similarity_threshold",
                value: t,
                range: "(0, 1]".to_string(),
            });
        }
        ensure_min("clustering.max_label_length", self.max_label_length, 4)?;
        ensure_min(
            "clustering.message_pattern_length",
            self.message_pattern_length,
            1,
        )?;
        self.tfidf.validate()
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            tfidf: TfIdfConfig::for_clustering(),
            max_label_length: defaults::DEFAULT_MAX_LABEL_LENGTH,
            message_pattern_length: defaults::DEFAULT_MESSAGE_PATTERN_LENGTH,
            trace_snippet_lines: defaults::DEFAULT_TRACE_SNIPPET_LINES,
        }
    }
}
