//! Cache of loaded YAML knowledge bases, keyed by canonical directory path.
//!
//! Owned by whoever orchestrates triage and passed by reference; there is no
//! process-wide instance. Entries live until invalidated or evicted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use moka::sync::Cache;
use tracing::debug;

use triage_core::config::KnowledgeConfig;
use triage_core::errors::KnowledgeBaseError;

use crate::provider::YamlKnowledgeBase;

pub struct KnowledgeBaseCache {
    cache: Cache<PathBuf, Arc<YamlKnowledgeBase>>,
}

impl KnowledgeBaseCache {
    /// Cache holding at most `max_entries` knowledge bases.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn from_config(config: &KnowledgeConfig) -> Self {
        Self::new(config.cache_capacity)
    }

    /// Cached knowledge base for `path`, loading it on a miss.
    /// Load errors are returned and nothing is cached.
    pub fn get_or_load(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Arc<YamlKnowledgeBase>, KnowledgeBaseError> {
        let key = cache_key(path.as_ref());
        if let Some(kb) = self.cache.get(&key) {
            debug!(path = %key.display(), "knowledge base cache hit");
            return Ok(kb);
        }
        let kb = Arc::new(YamlKnowledgeBase::load(&key)?);
        self.cache.insert(key, Arc::clone(&kb));
        Ok(kb)
    }

    /// Drop the cached knowledge base for `path`; the next lookup reloads it.
    pub fn invalidate(&self, path: impl AsRef<Path>) {
        self.cache.invalidate(&cache_key(path.as_ref()));
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.cache.contains_key(&cache_key(path.as_ref()))
    }
}

impl Default for KnowledgeBaseCache {
    fn default() -> Self {
        Self::from_config(&KnowledgeConfig::default())
    }
}

/// Canonical path when it resolves, the given path otherwise.
fn cache_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
