//! Error types: one enum per subsystem, aggregated by [`TriageError`].

mod collaborator_error;
mod config_error;
mod knowledge_error;
mod source_error;

pub use collaborator_error::{ExplainError, PublishError};
pub use config_error::ConfigError;
pub use knowledge_error::KnowledgeBaseError;
pub use source_error::SourceError;

/// Top-level error for the triage system.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    KnowledgeBase(#[from] KnowledgeBaseError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Explain(#[from] ExplainError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("feedback store error: {reason}")]
    Feedback { reason: String },
}

/// Convenience alias used across the workspace.
pub type TriageResult<T> = Result<T, TriageError>;
