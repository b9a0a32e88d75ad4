use std::collections::BTreeSet;

use crate::errors::TriageResult;
use crate::models::{FeedbackFilter, FeedbackVote};

/// Persistent likes/dislikes keyed by (error fingerprint, entry id).
pub trait FeedbackStore: Send + Sync {
    /// Upsert a vote. Returns `true` when a new record was created,
    /// `false` when an existing vote was overwritten.
    fn record_vote(&self, entry_id: &str, fingerprint: &str, vote: FeedbackVote)
        -> TriageResult<bool>;

    /// Entry ids disliked for this fingerprint.
    fn exclusions(&self, fingerprint: &str) -> BTreeSet<String>;

    /// Entry ids liked for this fingerprint.
    fn boosts(&self, fingerprint: &str) -> BTreeSet<String>;

    fn filter_for(&self, fingerprint: &str) -> FeedbackFilter {
        FeedbackFilter {
            excluded: self.exclusions(fingerprint),
            boosted: self.boosts(fingerprint),
        }
    }
}
