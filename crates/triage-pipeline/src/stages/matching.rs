use std::collections::BTreeMap;

use triage_core::models::{ClusterMatches, ClusteringReport, FailureCluster, FailureId, KnowledgeEntry};
use triage_core::traits::FeedbackStore;
use triage_knowledge::TextMatcher;
use triage_observability::events;
use triage_text::compute_fingerprint;

/// Text a cluster is matched by: example message, trace snippet and the
/// representative's log blocks, blank parts skipped.
pub fn cluster_query(cluster: &FailureCluster, log_snippet: Option<&str>) -> String {
    [
        cluster.example_message.as_deref(),
        cluster.example_trace_snippet.as_deref(),
        log_snippet,
    ]
    .into_iter()
    .flatten()
    .filter(|t| !t.trim().is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}

/// Match every cluster. The matcher is fitted once on `entries`. Clusters
/// without text or without matches are left out of the result.
pub fn match_clusters(
    matcher: &mut TextMatcher,
    entries: &[KnowledgeEntry],
    clustering: &ClusteringReport,
    log_snippets: &BTreeMap<FailureId, String>,
    feedback: Option<&dyn FeedbackStore>,
) -> Vec<ClusterMatches> {
    matcher.fit(entries);

    let mut out = Vec::new();
    for cluster in &clustering.clusters {
        let log = log_snippets.get(&cluster.representative_id).map(String::as_str);
        let query = cluster_query(cluster, log);
        if query.is_empty() {
            continue;
        }
        let matches = match feedback {
            Some(store) => {
                let filter = store.filter_for(&compute_fingerprint(&query));
                matcher.match_with_feedback(&query, entries, &filter, Some(&cluster.cluster_id))
            }
            None => matcher.match_text(&query, entries, Some(&cluster.cluster_id)),
        };
        if !matches.is_empty() {
            out.push(ClusterMatches {
                cluster_id: cluster.cluster_id.clone(),
                matches,
            });
        }
    }
    events::stage_completed("matching", clustering.clusters.len(), 0);
    out
}
