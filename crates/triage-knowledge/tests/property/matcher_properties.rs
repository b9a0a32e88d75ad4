use proptest::prelude::*;
use triage_core::config::MatcherConfig;
use triage_core::models::{KnowledgeEntry, MatchTier, RootCauseCategory};
use triage_knowledge::TextMatcher;

const WORDS: &[&str] = &[
    "timeout", "connection", "refused", "element", "missing", "database", "login",
    "expected", "status", "null", "pointer", "socket", "closed", "quota", "disk",
];

fn phrase(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), len).prop_map(|w| w.join(" "))
}

fn entries_strategy() -> impl Strategy<Value = Vec<KnowledgeEntry>> {
    prop::collection::vec((phrase(1..6), phrase(1..4)), 1..6).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (example, title))| KnowledgeEntry {
                id: format!("kb-{i}"),
                title,
                description: String::new(),
                error_example: example,
                category: RootCauseCategory::Test,
                resolution_steps: Vec::new(),
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tier3_scores_never_exceed_cap(entries in entries_strategy(), query in phrase(1..10), fit in any::<bool>()) {
        let mut matcher = TextMatcher::new(MatcherConfig::default()).unwrap();
        if fit {
            matcher.fit(&entries);
        }
        for result in matcher.match_text(&query, &entries, None) {
            prop_assert!((0.0..=1.0).contains(&result.score));
            if result.tier == MatchTier::TfIdf {
                prop_assert!(result.score <= matcher.config().tier3_score_cap);
            }
        }
    }

    #[test]
    fn embedded_example_is_top_with_tier1_score(
        entries in entries_strategy(),
        pick in any::<prop::sample::Index>(),
        prefix in phrase(0..4),
        suffix in phrase(0..4),
    ) {
        let target = &entries[pick.index(entries.len())];
        let query = format!("{prefix} {} {suffix}", target.error_example);
        let matcher = TextMatcher::new(MatcherConfig::default()).unwrap();
        let results = matcher.match_text(&query, &entries, None);

        let hit = results.iter().find(|r| r.entry.id == target.id);
        prop_assert!(hit.is_some() || results.len() == matcher.config().max_results);
        if let Some(hit) = hit {
            prop_assert_eq!(hit.tier, MatchTier::ExactSubstring);
            prop_assert_eq!(hit.score, 1.0);
        }
        prop_assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn results_sorted_and_bounded(entries in entries_strategy(), query in phrase(1..10)) {
        let matcher = TextMatcher::new(MatcherConfig::default()).unwrap();
        let results = matcher.match_text(&query, &entries, None);
        prop_assert!(results.len() <= matcher.config().max_results);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for result in &results {
            prop_assert!(result.score >= matcher.config().min_score);
        }
    }
}
