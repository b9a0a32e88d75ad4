//! In-memory feedback store.

use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use chrono::Utc;
use tracing::debug;

use triage_core::errors::{TriageError, TriageResult};
use triage_core::models::{FeedbackRecord, FeedbackVote};
use triage_core::traits::FeedbackStore;
use triage_observability::events;

/// Votes keyed by (fingerprint, entry id). A new vote replaces the old one.
#[derive(Debug, Default)]
pub struct InMemoryFeedbackStore {
    votes: RwLock<HashMap<(String, String), FeedbackRecord>>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, ordered by fingerprint then entry id.
    pub fn records(&self) -> Vec<FeedbackRecord> {
        let votes = self.read_votes();
        let mut records: Vec<FeedbackRecord> = votes.values().cloned().collect();
        records.sort_by(|a, b| {
            (a.fingerprint.as_str(), a.entry_id.as_str())
                .cmp(&(b.fingerprint.as_str(), b.entry_id.as_str()))
        });
        records
    }

    /// Reads survive a poisoned lock: every write replaces a whole record,
    /// so the map is never left half-updated.
    fn read_votes(&self) -> RwLockReadGuard<'_, HashMap<(String, String), FeedbackRecord>> {
        self.votes.read().unwrap_or_else(|poisoned| {
            events::degradation_triggered(
                "feedback.read",
                "vote lock poisoned",
                "reading recovered votes",
            );
            PoisonError::into_inner(poisoned)
        })
    }

    fn entries_with(&self, fingerprint: &str, vote: FeedbackVote) -> BTreeSet<String> {
        self.read_votes()
            .values()
            .filter(|r| r.fingerprint == fingerprint && r.vote == vote)
            .map(|r| r.entry_id.clone())
            .collect()
    }
}

impl FeedbackStore for InMemoryFeedbackStore {
    fn record_vote(
        &self,
        entry_id: &str,
        fingerprint: &str,
        vote: FeedbackVote,
    ) -> TriageResult<bool> {
        let mut votes = self.votes.write().map_err(|e| TriageError::Feedback {
            reason: e.to_string(),
        })?;
        let record = FeedbackRecord {
            entry_id: entry_id.to_string(),
            fingerprint: fingerprint.to_string(),
            vote,
            recorded_at: Utc::now(),
        };
        let created = votes
            .insert((fingerprint.to_string(), entry_id.to_string()), record)
            .is_none();
        debug!(entry = %entry_id, fingerprint = %fingerprint, ?vote, created, "feedback recorded");
        Ok(created)
    }

    fn exclusions(&self, fingerprint: &str) -> BTreeSet<String> {
        self.entries_with(fingerprint, FeedbackVote::Dislike)
    }

    fn boosts(&self, fingerprint: &str) -> BTreeSet<String> {
        self.entries_with(fingerprint, FeedbackVote::Like)
    }
}
