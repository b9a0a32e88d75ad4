use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackVote {
    Like,
    Dislike,
}

/// A vote on one knowledge entry for one error fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub entry_id: String,
    pub fingerprint: String,
    pub vote: FeedbackVote,
    pub recorded_at: DateTime<Utc>,
}

/// Entry ids to drop or promote for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFilter {
    pub excluded: BTreeSet<String>,
    pub boosted: BTreeSet<String>,
}

impl FeedbackFilter {
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty() && self.boosted.is_empty()
    }

    pub fn is_excluded(&self, entry_id: &str) -> bool {
        self.excluded.contains(entry_id)
    }

    pub fn is_boosted(&self, entry_id: &str) -> bool {
        self.boosted.contains(entry_id)
    }
}
