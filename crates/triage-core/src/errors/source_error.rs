/// Errors from the test-results data source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP {status} from {endpoint}: {message}")]
    Api {
        status: u16,
        endpoint: String,
        message: String,
    },

    #[error("authentication failed: {reason}")]
    Authentication { reason: String },

    #[error("pagination limit of {max_pages} pages exceeded")]
    PaginationLimit { max_pages: usize },

    #[error("run {run_id} not found")]
    RunNotFound { run_id: u64 },

    #[error("source unavailable: {reason}")]
    Unavailable { reason: String },
}
