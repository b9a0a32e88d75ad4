//! Span definitions per operation: clustering, matching, pipeline run, explanation.

/// Create a clustering span.
#[macro_export]
macro_rules! clustering_span {
    ($failure_count:expr, $threshold:expr) => {
        tracing::info_span!(
            "triage.clustering",
            failure_count = $failure_count,
            threshold = $threshold
        )
    };
}

/// Create a knowledge-base matching span.
#[macro_export]
macro_rules! matching_span {
    ($query_label:expr, $entry_count:expr) => {
        tracing::debug_span!(
            "triage.matching",
            query = %$query_label,
            entry_count = $entry_count
        )
    };
}

/// Create a pipeline run span.
#[macro_export]
macro_rules! pipeline_span {
    ($run_id:expr) => {
        tracing::info_span!("triage.pipeline", run_id = $run_id)
    };
}

/// Create an explainer span.
#[macro_export]
macro_rules! explain_span {
    ($cluster_id:expr) => {
        tracing::info_span!("triage.explain", cluster_id = %$cluster_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLUSTERING: &str = "triage.clustering";
    pub const MATCHING: &str = "triage.matching";
    pub const PIPELINE: &str = "triage.pipeline";
    pub const EXPLAIN: &str = "triage.explain";
}
