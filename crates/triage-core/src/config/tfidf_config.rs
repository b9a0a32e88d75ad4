use serde::{Deserialize, Serialize};

use super::{defaults, ensure_min};
use crate::errors::ConfigError;

/// TF-IDF vectorizer parameters shared by clustering and matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    /// Vocabulary cap: only the most frequent terms across the corpus are kept.
    pub max_features: usize,
    /// Inclusive n-gram range over word tokens, e.g. (1, 2) for unigrams + bigrams.
    pub ngram_range: (usize, usize),
    /// Minimum token length in characters.
    pub min_token_len: usize,
    /// Use term presence (0/1) instead of raw counts for term frequency.
    pub binary_tf: bool,
    /// Lowercase tokens before counting.
    pub lowercase: bool,
}

impl TfIdfConfig {
    /// Clustering flavour: binary term frequency so repeated boilerplate
    /// lines cannot outweigh the message.
    pub fn for_clustering() -> Self {
        Self {
            binary_tf: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_min("tfidf.max_features", self.max_features, 1)?;
        ensure_min("tfidf.min_token_len", self.min_token_len, 1)?;
        let (min, max) = self.ngram_range;
        if min == 0 || min > max {
            return Err(ConfigError::InvalidNgramRange { min, max });
        }
        Ok(())
    }
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            max_features: defaults::DEFAULT_TFIDF_MAX_FEATURES,
            ngram_range: defaults::DEFAULT_TFIDF_NGRAM_RANGE,
            min_token_len: defaults::DEFAULT_TFIDF_MIN_TOKEN_LEN,
            binary_tf: false,
            lowercase: true,
        }
    }
}
