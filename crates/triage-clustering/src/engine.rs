//! ClusteringEngine: documents → TF-IDF → complete linkage → clusters.

use std::collections::BTreeMap;

use triage_core::config::ClusteringConfig;
use triage_core::errors::ConfigError;
use triage_core::models::{ClusteringReport, FailureRecord};
use triage_observability::events;
use triage_text::TfIdfVectorizer;
use tracing::debug;

use crate::algorithms::{complete_linkage, flat_clusters};
use crate::assembly::{assemble, resolve_id_collisions};
use crate::distance::DistanceMatrix;
use crate::document::{build_document, is_blank};

/// Groups failures by root cause.
///
/// `cluster` never fails: degenerate input degrades to singleton clusters.
/// Only construction with an invalid config is an error.
#[derive(Debug, Clone)]
pub struct ClusteringEngine {
    config: ClusteringConfig,
}

impl ClusteringEngine {
    pub fn new(config: ClusteringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Partition `failures` into clusters.
    ///
    /// Every input record lands in exactly one cluster. Output order is
    /// member count descending, then cluster id ascending, independent of
    /// input order.
    pub fn cluster(&self, failures: &[FailureRecord]) -> ClusteringReport {
        let span = triage_observability::clustering_span!(
            failures.len(),
            self.config.similarity_threshold
        );
        let _guard = span.enter();

        if failures.is_empty() {
            return ClusteringReport::empty();
        }

        // Stable id order makes linkage tie-breaking independent of input order.
        let mut order: Vec<usize> = (0..failures.len()).collect();
        order.sort_by_key(|&i| (failures[i].id, i));

        let mut comparable: Vec<(usize, String)> = Vec::new();
        let mut forced_singletons: Vec<usize> = Vec::new();
        for i in order {
            let document = build_document(&failures[i]);
            if is_blank(&document) {
                forced_singletons.push(i);
            } else {
                comparable.push((i, document));
            }
        }
        if !forced_singletons.is_empty() {
            debug!(
                count = forced_singletons.len(),
                "failures without text kept as singletons"
            );
        }

        let documents: Vec<&str> = comparable.iter().map(|(_, d)| d.as_str()).collect();
        let mut groups: Vec<Vec<usize>> = self
            .group_documents(&documents)
            .into_iter()
            .map(|g| g.into_iter().map(|k| comparable[k].0).collect())
            .collect();
        groups.extend(forced_singletons.into_iter().map(|i| vec![i]));

        let mut clusters: Vec<_> = groups
            .iter()
            .filter_map(|group| {
                let members: Vec<&FailureRecord> = group.iter().map(|&i| &failures[i]).collect();
                assemble(&members, &self.config)
            })
            .collect();
        resolve_id_collisions(&mut clusters);
        clusters.sort_by(|a, b| {
            b.member_count()
                .cmp(&a.member_count())
                .then_with(|| a.cluster_id.cmp(&b.cluster_id))
        });

        let unclustered_count = clusters.iter().filter(|c| c.is_singleton()).count();
        events::clustering_completed(failures.len(), clusters.len(), unclustered_count);

        ClusteringReport {
            total_failures: failures.len(),
            clusters,
            unclustered_count,
        }
    }

    /// Group non-blank documents; returns index groups into `documents`.
    fn group_documents(&self, documents: &[&str]) -> Vec<Vec<usize>> {
        match documents.len() {
            0 => return Vec::new(),
            1 => return vec![vec![0]],
            _ => {}
        }

        let mut vectorizer = TfIdfVectorizer::new(self.config.tfidf.clone());
        let vectors = match vectorizer.fit_transform(documents) {
            Ok(v) => v,
            Err(e) => {
                events::degradation_triggered(
                    "clustering",
                    &e.to_string(),
                    "one singleton cluster per failure",
                );
                return (0..documents.len()).map(|i| vec![i]).collect();
            }
        };

        let distances = DistanceMatrix::from_vectors(&vectors);
        let merges = complete_linkage(&distances);
        let labels = flat_clusters(
            documents.len(),
            &merges,
            self.config.distance_threshold(),
        );
        debug!(
            documents = documents.len(),
            vocabulary = vectorizer.vocabulary_len(),
            merges = merges.len(),
            "dendrogram cut at {:.3}",
            self.config.distance_threshold()
        );

        let mut by_label: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (index, label) in labels.into_iter().enumerate() {
            by_label.entry(label).or_default().push(index);
        }
        by_label.into_values().collect()
    }
}

impl Default for ClusteringEngine {
    fn default() -> Self {
        Self {
            config: ClusteringConfig::default(),
        }
    }
}
