use crate::errors::{ExplainError, PublishError, SourceError};
use crate::models::{FailureId, TestResult};

/// Test-results data source.
pub trait FailureSource: Send + Sync {
    /// Display name of a run, if the source has one.
    fn run_name(&self, run_id: u64) -> Result<Option<String>, SourceError>;

    /// Every test result of a run, all pages fetched.
    fn test_results(&self, run_id: u64) -> Result<Vec<TestResult>, SourceError>;

    /// Text attachments (logs) of one failed result.
    fn attachment_texts(&self, _failure_id: FailureId) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }
}

/// Language-model explainer: takes a prompt, returns analysis text.
pub trait ClusterExplainer: Send + Sync {
    fn explain(&self, prompt: &str) -> Result<String, ExplainError>;
}

/// Writes triage output back to the test-management system.
pub trait ResultsPublisher: Send + Sync {
    fn publish_comment(&self, test_case_id: u64, text: &str) -> Result<(), PublishError>;
}
