//! TriagePipeline: one run from fetched results to published recommendations.

use std::collections::BTreeMap;

use tracing::{debug, info};

use triage_clustering::ClusteringEngine;
use triage_core::config::{PipelineConfig, TriageConfig};
use triage_core::errors::{ConfigError, TriageResult};
use triage_core::models::AnalysisResult;
use triage_core::traits::{
    ClusterExplainer, FailureSource, FeedbackStore, KnowledgeBaseProvider, ResultsPublisher,
};
use triage_knowledge::TextMatcher;

use crate::stages::{explain, fetch, logs, matching, publish};

/// Orchestrates a triage run over pluggable collaborators.
///
/// Only the failure source is required. A stage whose collaborator is
/// missing is skipped just like a stage disabled in [`PipelineConfig`].
pub struct TriagePipeline {
    config: PipelineConfig,
    clustering: ClusteringEngine,
    matcher: TextMatcher,
    source: Box<dyn FailureSource>,
    knowledge_base: Option<Box<dyn KnowledgeBaseProvider>>,
    feedback: Option<Box<dyn FeedbackStore>>,
    explainer: Option<Box<dyn ClusterExplainer>>,
    publisher: Option<Box<dyn ResultsPublisher>>,
}

impl TriagePipeline {
    /// Validates the clustering and matcher sections up front.
    pub fn new(config: &TriageConfig, source: Box<dyn FailureSource>) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.pipeline.clone(),
            clustering: ClusteringEngine::new(config.clustering.clone())?,
            matcher: TextMatcher::new(config.matcher.clone())?,
            source,
            knowledge_base: None,
            feedback: None,
            explainer: None,
            publisher: None,
        })
    }

    pub fn with_knowledge_base(mut self, kb: Box<dyn KnowledgeBaseProvider>) -> Self {
        self.knowledge_base = Some(kb);
        self
    }

    pub fn with_feedback_store(mut self, store: Box<dyn FeedbackStore>) -> Self {
        self.feedback = Some(store);
        self
    }

    pub fn with_explainer(mut self, explainer: Box<dyn ClusterExplainer>) -> Self {
        self.explainer = Some(explainer);
        self
    }

    pub fn with_publisher(mut self, publisher: Box<dyn ResultsPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every enabled stage for `run_id`.
    ///
    /// Errors only when the failure source cannot deliver the run.
    pub fn analyze(&self, run_id: u64) -> TriageResult<AnalysisResult> {
        let span = triage_observability::pipeline_span!(run_id);
        let _guard = span.enter();

        let triage = fetch::fetch_report(self.source.as_ref(), run_id)?;

        let log_snippets = if self.config.log_extraction_enabled && !triage.failed_tests.is_empty() {
            logs::collect_log_snippets(self.source.as_ref(), &triage)
        } else {
            BTreeMap::new()
        };

        let clustering = (self.config.clustering_enabled && !triage.failed_tests.is_empty())
            .then(|| self.clustering.cluster(&triage.failure_records()));

        let matches = match (&clustering, &self.knowledge_base) {
            (Some(report), Some(kb)) if self.config.kb_enabled => {
                debug!(kb = kb.name(), entries = kb.len(), "matching clusters");
                let mut matcher = self.matcher.clone();
                matching::match_clusters(
                    &mut matcher,
                    kb.entries(),
                    report,
                    &log_snippets,
                    self.feedback.as_deref(),
                )
            }
            _ => Vec::new(),
        };

        let explanations = match (&clustering, &self.explainer) {
            (Some(report), Some(explainer)) if self.config.llm_enabled => Some(explain::explain_clusters(
                explainer.as_ref(),
                report,
                &matches,
                &log_snippets,
                self.config.max_prompt_matches,
            )),
            _ => None,
        };

        let push = match (&clustering, &self.publisher) {
            (Some(report), Some(publisher)) if self.config.push_enabled && !matches.is_empty() => {
                Some(publish::publish_recommendations(
                    publisher.as_ref(),
                    report,
                    &matches,
                    &triage,
                ))
            }
            _ => None,
        };

        info!(
            run_id,
            failures = triage.failure_count(),
            clusters = clustering.as_ref().map_or(0, |c| c.cluster_count()),
            matched_clusters = matches.len(),
            "triage run analyzed"
        );

        Ok(AnalysisResult {
            triage,
            log_snippets,
            clustering,
            matches,
            explanations,
            push,
        })
    }
}
