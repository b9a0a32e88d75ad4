use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ClusteringReport, FailureId, MatchResult, TriageReport};

/// Knowledge-base matches for one cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMatches {
    pub cluster_id: String,
    pub matches: Vec<MatchResult>,
}

/// Explainer output for one cluster. Exactly one of `analysis`/`error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterExplanation {
    pub cluster_id: String,
    pub analysis: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationSummary {
    pub total_clusters: usize,
    pub analyzed_count: usize,
    pub failed_count: usize,
    /// Clusters with no message, trace or log text to explain.
    pub skipped_count: usize,
    pub explanations: Vec<ClusterExplanation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSummary {
    pub total_tests: usize,
    pub updated_count: usize,
    pub failed_count: usize,
    pub skipped_count: usize,
}

/// Everything one pipeline run produced. Stages that were disabled are `None` or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub triage: TriageReport,
    /// ERROR blocks extracted from attachments, per failed result.
    #[serde(default)]
    pub log_snippets: BTreeMap<FailureId, String>,
    pub clustering: Option<ClusteringReport>,
    /// Only clusters with at least one match, in cluster order.
    pub matches: Vec<ClusterMatches>,
    pub explanations: Option<ExplanationSummary>,
    pub push: Option<PushSummary>,
}

impl AnalysisResult {
    pub fn matches_for(&self, cluster_id: &str) -> &[MatchResult] {
        self.matches
            .iter()
            .find(|m| m.cluster_id == cluster_id)
            .map(|m| m.matches.as_slice())
            .unwrap_or(&[])
    }
}
