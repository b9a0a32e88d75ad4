use std::collections::BTreeMap;

use tracing::{info, warn};

use triage_core::models::{ClusterMatches, ClusteringReport, PushSummary, TriageReport};
use triage_core::traits::ResultsPublisher;
use triage_observability::events;

use crate::comment::format_kb_comment;

/// Post each cluster's recommendation once per unique test case. Members
/// without a test case id, repeats of a test case and clusters without
/// matches count as skipped; a failed post counts as failed.
pub fn publish_recommendations(
    publisher: &dyn ResultsPublisher,
    clustering: &ClusteringReport,
    matches: &[ClusterMatches],
    triage: &TriageReport,
) -> PushSummary {
    let mut comments: BTreeMap<u64, String> = BTreeMap::new();
    let mut skipped = 0usize;

    for cluster in &clustering.clusters {
        let text = matches
            .iter()
            .find(|m| m.cluster_id == cluster.cluster_id)
            .map(|m| format_kb_comment(&m.matches))
            .unwrap_or_default();
        if text.is_empty() {
            skipped += cluster.member_count();
            continue;
        }
        for &member in &cluster.member_ids {
            let Some(test_case_id) = triage.test_case_id(member) else {
                warn!(failure = member, "result has no test case id, not published");
                skipped += 1;
                continue;
            };
            if comments.contains_key(&test_case_id) {
                skipped += 1;
                continue;
            }
            comments.insert(test_case_id, text.clone());
        }
    }

    let mut updated = 0usize;
    let mut failed = 0usize;
    for (&test_case_id, text) in &comments {
        match publisher.publish_comment(test_case_id, text) {
            Ok(()) => updated += 1,
            Err(e) => {
                failed += 1;
                warn!(test_case_id, error = %e, "comment not published");
            }
        }
    }
    info!(updated, failed, skipped, "recommendations published");
    events::stage_completed("publish", updated, failed);

    PushSummary {
        total_tests: clustering.total_failures,
        updated_count: updated,
        failed_count: failed,
        skipped_count: skipped,
    }
}
