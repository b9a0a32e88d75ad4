use std::collections::BTreeMap;

use tracing::{debug, warn};

use triage_core::models::{
    ClusterExplanation, ClusterMatches, ClusteringReport, ExplanationSummary, FailureId,
};
use triage_core::traits::ClusterExplainer;
use triage_observability::events;

use crate::prompt::{build_cluster_prompt, has_error_text};

const NO_TEXT_REASON: &str = "no error text to analyze";

/// Ask the explainer about every cluster. A failed call is recorded on that
/// cluster and the rest continue.
pub fn explain_clusters(
    explainer: &dyn ClusterExplainer,
    clustering: &ClusteringReport,
    matches: &[ClusterMatches],
    log_snippets: &BTreeMap<FailureId, String>,
    max_prompt_matches: usize,
) -> ExplanationSummary {
    let mut summary = ExplanationSummary {
        total_clusters: clustering.clusters.len(),
        ..ExplanationSummary::default()
    };

    for cluster in &clustering.clusters {
        let span = triage_observability::explain_span!(cluster.cluster_id);
        let _guard = span.enter();

        let log = log_snippets.get(&cluster.representative_id).map(String::as_str);
        if !has_error_text(cluster, log) {
            debug!("cluster skipped, no error text");
            summary.skipped_count += 1;
            summary.explanations.push(ClusterExplanation {
                cluster_id: cluster.cluster_id.clone(),
                analysis: None,
                error: Some(NO_TEXT_REASON.to_string()),
            });
            continue;
        }

        let cluster_matches = matches
            .iter()
            .find(|m| m.cluster_id == cluster.cluster_id)
            .map(|m| m.matches.as_slice())
            .unwrap_or(&[]);
        let prompt = build_cluster_prompt(cluster, cluster_matches, log, max_prompt_matches);

        let explanation = match explainer.explain(&prompt) {
            Ok(analysis) => {
                summary.analyzed_count += 1;
                debug!(chars = analysis.chars().count(), "cluster analyzed");
                ClusterExplanation {
                    cluster_id: cluster.cluster_id.clone(),
                    analysis: Some(analysis),
                    error: None,
                }
            }
            Err(e) => {
                summary.failed_count += 1;
                warn!(error = %e, "cluster analysis failed");
                ClusterExplanation {
                    cluster_id: cluster.cluster_id.clone(),
                    analysis: None,
                    error: Some(e.to_string()),
                }
            }
        };
        summary.explanations.push(explanation);
    }

    events::stage_completed("explain", summary.analyzed_count, summary.failed_count);
    summary
}
