use triage_core::config::*;
use triage_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TriageConfig::from_toml("").unwrap();

    // Clustering defaults
    assert_eq!(config.clustering.similarity_threshold, 0.60);
    assert_eq!(config.clustering.tfidf.max_features, 1000);
    assert_eq!(config.clustering.tfidf.ngram_range, (1, 2));
    assert!(config.clustering.tfidf.binary_tf);
    assert_eq!(config.clustering.max_label_length, 120);
    assert_eq!(config.clustering.trace_snippet_lines, 5);

    // Matcher defaults
    assert_eq!(config.matcher.min_score, 0.15);
    assert_eq!(config.matcher.max_results, 5);
    assert!(!config.matcher.tfidf.binary_tf);
    assert_eq!(config.matcher.tier1_score, 1.0);
    assert_eq!(config.matcher.tier2_min_lines, 2);
    assert_eq!(config.matcher.tier2_score_floor, 0.70);
    assert_eq!(config.matcher.tier2_score_ceiling, 0.95);
    assert_eq!(config.matcher.tier3_score_cap, 0.50);
    assert_eq!(config.matcher.example_weight, 0.8);
    assert_eq!(config.matcher.title_desc_weight, 0.2);

    // Pipeline defaults
    assert!(config.pipeline.clustering_enabled);
    assert!(config.pipeline.kb_enabled);
    assert!(!config.pipeline.llm_enabled);
    assert!(!config.pipeline.push_enabled);
    assert_eq!(config.pipeline.max_prompt_matches, 3);

    assert_eq!(config.knowledge.kb_path, "knowledge_base");
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[clustering]
similarity_threshold = 0.9

[matcher]
max_results = 10

[matcher.tfidf]
max_features = 500
"#;
    let config = TriageConfig::from_toml(toml).unwrap();
    assert_eq!(config.clustering.similarity_threshold, 0.9);
    assert_eq!(config.matcher.max_results, 10);
    assert_eq!(config.matcher.tfidf.max_features, 500);
    // Non-overridden fields keep defaults
    assert_eq!(config.matcher.tfidf.ngram_range, (1, 2));
    assert_eq!(config.matcher.min_score, 0.15);
    assert_eq!(config.clustering.max_label_length, 120);
}

#[test]
fn config_serde_roundtrip() {
    let config = TriageConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = TriageConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn config_from_file_reads_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triage.toml");
    std::fs::write(&path, "[pipeline]\nllm_enabled = true\n").unwrap();
    let config = TriageConfig::from_file(&path).unwrap();
    assert!(config.pipeline.llm_enabled);
}

#[test]
fn config_from_missing_file_is_read_error() {
    let err = TriageConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = TriageConfig::from_toml("[clustering\nthreshold = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn similarity_threshold_zero_rejected() {
    let err = ClusteringConfig::with_threshold(0.0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
    assert!(ClusteringConfig::with_threshold(1.0).validate().is_ok());
    assert!(ClusteringConfig::with_threshold(1.01).validate().is_err());
    assert!(ClusteringConfig::with_threshold(f64::NAN).validate().is_err());
}

#[test]
fn distance_threshold_is_complement() {
    let config = ClusteringConfig::with_threshold(0.75);
    assert!((config.distance_threshold() - 0.25).abs() < 1e-12);
}

#[test]
fn invalid_ngram_range_rejected() {
    let mut config = TfIdfConfig::default();
    config.ngram_range = (2, 1);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidNgramRange { min: 2, max: 1 })
    ));
    config.ngram_range = (0, 2);
    assert!(config.validate().is_err());
}

#[test]
fn weights_must_sum_to_one() {
    let config = MatcherConfig {
        example_weight: 0.7,
        title_desc_weight: 0.2,
        ..MatcherConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::WeightSum { .. })
    ));
}

#[test]
fn tier3_cap_must_stay_below_tier2_floor() {
    let config = MatcherConfig {
        tier3_score_cap: 0.75,
        ..MatcherConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvertedBounds { .. })
    ));
}

#[test]
fn tier2_ceiling_must_not_exceed_tier1() {
    let config = MatcherConfig {
        tier1_score: 0.9,
        ..MatcherConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn zero_max_results_rejected() {
    let config = MatcherConfig {
        max_results: 0,
        ..MatcherConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::TooSmall { min: 1, .. })
    ));
}

#[test]
fn invalid_section_fails_whole_load() {
    let toml = "[matcher]\nmin_score = 1.5\n";
    assert!(TriageConfig::from_toml(toml).is_err());
}

#[test]
fn zero_prompt_matches_rejected() {
    let toml = "[pipeline]\nmax_prompt_matches = 0\n";
    assert!(matches!(
        TriageConfig::from_toml(toml),
        Err(ConfigError::TooSmall {
            name: "pipeline.max_prompt_matches",
            ..
        })
    ));
}

#[test]
fn zero_cache_capacity_rejected() {
    let config = KnowledgeConfig {
        cache_capacity: 0,
        ..KnowledgeConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::TooSmall {
            name: "knowledge.cache_capacity",
            ..
        })
    ));
}

#[test]
fn blank_kb_path_rejected() {
    let config = KnowledgeConfig {
        kb_path: "  ".into(),
        ..KnowledgeConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Blank { name: "knowledge.kb_path" })
    ));
    assert!(KnowledgeConfig::default().validate().is_ok());
    assert!(PipelineConfig::default().validate().is_ok());
}
