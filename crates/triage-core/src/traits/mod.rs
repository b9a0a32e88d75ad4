mod collaborators;
mod feedback_store;
mod knowledge_base;

pub use collaborators::{ClusterExplainer, FailureSource, ResultsPublisher};
pub use feedback_store::FeedbackStore;
pub use knowledge_base::KnowledgeBaseProvider;
