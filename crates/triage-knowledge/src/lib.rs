//! # triage-knowledge
//!
//! Known-error knowledge base: YAML and in-memory providers, an explicit
//! load cache, an in-memory feedback store, and [`TextMatcher`], which ranks
//! entries against failure text in three tiers (exact substring, line
//! overlap, capped TF-IDF similarity).

pub mod cache;
pub mod feedback;
pub mod matcher;
pub mod provider;

pub use cache::KnowledgeBaseCache;
pub use feedback::InMemoryFeedbackStore;
pub use matcher::TextMatcher;
pub use provider::{InMemoryKnowledgeBase, YamlKnowledgeBase};
