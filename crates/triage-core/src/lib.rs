//! # triage-core
//!
//! Foundation crate for the failure triage system.
//! Defines the data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ClusteringConfig, MatcherConfig, TfIdfConfig, TriageConfig};
pub use traits::{ClusterExplainer, FailureSource, FeedbackStore, KnowledgeBaseProvider, ResultsPublisher};
pub use errors::{TriageError, TriageResult};
pub use models::{
    ClusteringReport, FailureCluster, FailureId, FailureRecord, KnowledgeEntry, MatchResult,
    MatchTier, RootCauseCategory,
};
