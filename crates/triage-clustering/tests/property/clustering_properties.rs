use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use triage_clustering::document::{build_document, is_blank};
use triage_clustering::ClusteringEngine;
use triage_core::config::ClusteringConfig;
use triage_core::models::{FailureId, FailureRecord};
use triage_text::similarity::cosine_distance;
use triage_text::TfIdfVectorizer;

const WORDS: &[&str] = &[
    "timeout", "connection", "refused", "element", "not", "found", "database",
    "login", "page", "assertion", "expected", "status", "500", "null", "pointer",
];

fn failure_strategy() -> impl Strategy<Value = Vec<FailureRecord>> {
    prop::collection::vec(
        (
            prop::collection::vec(prop::sample::select(WORDS), 0..6),
            prop::option::of(prop::sample::select(&["env", "test", "service"][..])),
        ),
        0..14,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (words, category))| {
                let mut record = FailureRecord::new(i as FailureId + 1);
                if !words.is_empty() {
                    record = record.with_message(words.join(" "));
                }
                if let Some(category) = category {
                    record = record.with_category(category);
                }
                record
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_failure_in_exactly_one_cluster(failures in failure_strategy(), t in 0.05f64..=1.0) {
        let report = ClusteringEngine::new(ClusteringConfig::with_threshold(t))
            .unwrap()
            .cluster(&failures);
        let mut seen: Vec<FailureId> = report.clusters.iter().flat_map(|c| c.member_ids.clone()).collect();
        seen.sort_unstable();
        let expected: Vec<FailureId> = failures.iter().map(|f| f.id).collect();
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(report.total_failures, failures.len());
        for cluster in &report.clusters {
            prop_assert!(cluster.contains(cluster.representative_id));
        }
    }

    #[test]
    fn clustering_is_deterministic(failures in failure_strategy(), t in 0.05f64..=1.0) {
        let engine = ClusteringEngine::new(ClusteringConfig::with_threshold(t)).unwrap();
        let first = engine.cluster(&failures);
        let mut shuffled = failures.clone();
        shuffled.reverse();
        prop_assert_eq!(first, engine.cluster(&shuffled));
    }

    #[test]
    fn members_pairwise_within_threshold(failures in failure_strategy(), t in 0.05f64..=1.0) {
        let config = ClusteringConfig::with_threshold(t);
        let report = ClusteringEngine::new(config.clone()).unwrap().cluster(&failures);

        let documents: Vec<(FailureId, String)> = failures
            .iter()
            .map(|f| (f.id, build_document(f)))
            .filter(|(_, d)| !is_blank(d))
            .collect();
        let texts: Vec<&str> = documents.iter().map(|(_, d)| d.as_str()).collect();
        let mut vectorizer = TfIdfVectorizer::new(config.tfidf.clone());
        let Ok(vectors) = vectorizer.fit_transform(&texts) else {
            prop_assert!(report.clusters.iter().all(|c| c.is_singleton()));
            return Ok(());
        };
        let by_id: HashMap<FailureId, usize> =
            documents.iter().enumerate().map(|(i, (id, _))| (*id, i)).collect();

        for cluster in report.clusters.iter().filter(|c| !c.is_singleton()) {
            for a in &cluster.member_ids {
                for b in &cluster.member_ids {
                    let d = cosine_distance(&vectors[by_id[a]], &vectors[by_id[b]]);
                    prop_assert!(
                        d <= config.distance_threshold() + 1e-9,
                        "{} and {} at distance {} in one cluster (t = {})", a, b, d, t
                    );
                }
            }
        }
    }

    #[test]
    fn raising_threshold_only_splits(failures in failure_strategy(), low in 0.05f64..0.5, high in 0.5f64..=1.0) {
        let coarse = ClusteringEngine::new(ClusteringConfig::with_threshold(low)).unwrap().cluster(&failures);
        let fine = ClusteringEngine::new(ClusteringConfig::with_threshold(high)).unwrap().cluster(&failures);
        prop_assert!(fine.cluster_count() >= coarse.cluster_count());
    }
}

#[test]
fn identical_messages_share_cluster_at_any_threshold() {
    for t in [0.1, 0.5, 0.9, 1.0] {
        let failures: Vec<FailureRecord> = (1..=4)
            .map(|id| FailureRecord::new(id).with_message("Connection refused by database"))
            .collect();
        let report = ClusteringEngine::new(ClusteringConfig::with_threshold(t))
            .unwrap()
            .cluster(&failures);
        let groups: BTreeSet<Vec<FailureId>> = report.clusters.iter().map(|c| c.member_ids.clone()).collect();
        assert_eq!(groups, [vec![1, 2, 3, 4]].into_iter().collect());
    }
}
