use serde::{Deserialize, Serialize};

use super::FailureId;

/// Shared features that put failures into one cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSignature {
    /// Normalized prefix of the representative message.
    pub message_pattern: Option<String>,
    /// First trace line, recorded only when the representative has no message.
    pub trace_head: Option<String>,
    pub category: Option<String>,
}

/// A group of failures judged to share one root cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureCluster {
    /// Hash of the signature. Stable across runs for the same input,
    /// unique only within one clustering run.
    pub cluster_id: String,
    pub label: String,
    pub signature: ClusterSignature,
    /// Sorted ascending.
    pub member_ids: Vec<FailureId>,
    pub representative_id: FailureId,
    pub example_message: Option<String>,
    /// First lines of the representative trace.
    pub example_trace_snippet: Option<String>,
}

impl FailureCluster {
    pub fn member_count(&self) -> usize {
        self.member_ids.len()
    }

    pub fn is_singleton(&self) -> bool {
        self.member_ids.len() == 1
    }

    pub fn contains(&self, id: FailureId) -> bool {
        self.member_ids.binary_search(&id).is_ok()
    }
}

/// Result of clustering one batch of failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringReport {
    pub total_failures: usize,
    /// Sorted by member count descending, then cluster id ascending.
    pub clusters: Vec<FailureCluster>,
    /// Number of single-member clusters.
    pub unclustered_count: usize,
}

impl ClusteringReport {
    pub fn empty() -> Self {
        Self {
            total_failures: 0,
            clusters: Vec::new(),
            unclustered_count: 0,
        }
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    pub fn cluster_of(&self, id: FailureId) -> Option<&FailureCluster> {
        self.clusters.iter().find(|c| c.contains(id))
    }
}
