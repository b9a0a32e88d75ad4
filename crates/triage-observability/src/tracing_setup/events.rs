//! Structured log events for key triage operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a clustering completion event.
pub fn clustering_completed(failures: usize, clusters: usize, singletons: usize) {
    tracing::info!(
        event = "clustering_completed",
        failures = failures,
        clusters = clusters,
        singletons = singletons,
        "clustered {failures} failures into {clusters} clusters ({singletons} singletons)"
    );
}

/// Log a degradation: a component fell back to a weaker strategy.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a skipped input item (record, file or entry) that could not be used.
pub fn item_skipped(kind: &str, item: &str, reason: &str) {
    tracing::warn!(
        event = "item_skipped",
        kind = %kind,
        item = %item,
        reason = %reason,
        "{kind} skipped"
    );
}

/// Log a pipeline stage completion.
pub fn stage_completed(stage: &str, processed: usize, failed: usize) {
    tracing::info!(
        event = "stage_completed",
        stage = %stage,
        processed = processed,
        failed = failed,
        "stage {stage} completed"
    );
}
