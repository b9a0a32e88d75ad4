mod analysis;
mod cluster;
mod failure;
mod feedback;
mod knowledge;
mod triage;

pub use analysis::{AnalysisResult, ClusterExplanation, ClusterMatches, ExplanationSummary, PushSummary};
pub use cluster::{ClusterSignature, ClusteringReport, FailureCluster};
pub use failure::{FailureId, FailureRecord};
pub use feedback::{FeedbackFilter, FeedbackRecord, FeedbackVote};
pub use knowledge::{KnowledgeEntry, MatchResult, MatchTier, RootCauseCategory};
pub use triage::{TestResult, TestStatus, TriageReport};
