/// Knowledge-base loading errors.
///
/// Per-file and per-entry problems are logged and skipped by the loaders;
/// only problems with the knowledge-base location itself surface here.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("knowledge base path is not a directory: {path}")]
    NotADirectory { path: String },

    #[error("permission denied reading knowledge base at {path}")]
    PermissionDenied { path: String },

    #[error("failed to read knowledge base at {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("invalid knowledge entry {id:?}: {reason}")]
    InvalidEntry { id: String, reason: String },
}
