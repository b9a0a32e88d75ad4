use std::fmt;

use serde::{Deserialize, Serialize};

/// Root-cause category of a known error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootCauseCategory {
    /// Defect in the test itself.
    Test,
    /// Defect in the application under test.
    #[serde(alias = "app")]
    Service,
    /// Environment or infrastructure problem.
    Env,
    /// Bad or missing test data.
    Data,
}

impl RootCauseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Service => "service",
            Self::Env => "env",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for RootCauseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known-error template from the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Slug, unique within a knowledge base.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Reference error text, usually a log or trace excerpt.
    pub error_example: String,
    #[serde(alias = "root_cause")]
    pub category: RootCauseCategory,
    #[serde(default)]
    pub resolution_steps: Vec<String>,
}

impl KnowledgeEntry {
    /// Title and description joined, as used for the secondary tier-3 similarity.
    pub fn title_and_description(&self) -> String {
        if self.description.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.title, self.description)
        }
    }
}

/// Which matching tier produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    ExactSubstring,
    LineOverlap,
    TfIdf,
}

impl MatchTier {
    pub fn number(&self) -> u8 {
        match self {
            Self::ExactSubstring => 1,
            Self::LineOverlap => 2,
            Self::TfIdf => 3,
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ExactSubstring => "exact substring",
            Self::LineOverlap => "line overlap",
            Self::TfIdf => "TF-IDF similarity",
        };
        write!(f, "Tier {}: {}", self.number(), name)
    }
}

/// One ranked knowledge-base match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub entry: KnowledgeEntry,
    /// In [0, 1].
    pub score: f64,
    pub tier: MatchTier,
    /// Human-readable explanation; the first item names the tier.
    pub matched_on: Vec<String>,
}
