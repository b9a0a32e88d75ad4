/// Errors from the language-model explainer collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error("explainer request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("explainer returned an empty response")]
    EmptyResponse,
}

/// Errors from the results publisher collaborator (comments pushed back to the source).
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("failed to publish comment for test case {test_case_id}: {reason}")]
    CommentFailed { test_case_id: u64, reason: String },
}
