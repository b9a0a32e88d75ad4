use proptest::prelude::*;
use triage_core::config::TfIdfConfig;
use triage_text::{compute_fingerprint, cosine_similarity, normalize, TfIdfVectorizer};

// ── Normalization is idempotent ───────────────────────────────────────────

proptest! {
    #[test]
    fn normalize_idempotent_on_log_like_text(
        input in "[0-9a-fA-F:./,+TZ <>\\-\\n]{0,120}"
    ) {
        let once = normalize(&input);
        let twice = normalize(&once);
        prop_assert_eq!(&once, &twice, "input: {:?}", input);
    }

    #[test]
    fn normalize_idempotent_on_arbitrary_text(input in "\\PC{0,200}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_idempotent_on_composed_messages(
        uuid in "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
        year in 1990u32..2100,
        month in 1u32..13,
        day in 1u32..29,
        a in 0u8..=255, b in 0u8..=255,
        n in 1000u64..10_000_000,
    ) {
        let input = format!(
            "req {uuid} at {year}-{month:02}-{day:02} 10:00:00,123 from {a}.{b}.0.1 order {n}"
        );
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.contains(&uuid));
        prop_assert!(!once.contains(&n.to_string()));
    }
}

// ── Fingerprints ignore volatile values ───────────────────────────────────

proptest! {
    #[test]
    fn fingerprint_stable_across_order_numbers(x in 1000u64..u64::MAX, y in 1000u64..u64::MAX) {
        let a = compute_fingerprint(&format!("Order {x} rejected"));
        let b = compute_fingerprint(&format!("Order {y} rejected"));
        prop_assert_eq!(a, b);
    }
}

// ── Cosine similarity stays in [0, 1] ─────────────────────────────────────

proptest! {
    #[test]
    fn tfidf_similarity_in_unit_interval(
        docs in prop::collection::vec("[a-z ]{0,40}", 2..6)
    ) {
        let mut v = TfIdfVectorizer::new(TfIdfConfig::default());
        if let Ok(vecs) = v.fit_transform(&docs) {
            for a in &vecs {
                for b in &vecs {
                    let sim = cosine_similarity(a, b);
                    prop_assert!((0.0..=1.0).contains(&sim));
                }
            }
        }
    }
}
