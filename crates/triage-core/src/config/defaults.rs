//! Default values for every config section.

// Clustering
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.60;
pub const DEFAULT_MAX_LABEL_LENGTH: usize = 120;
pub const DEFAULT_MESSAGE_PATTERN_LENGTH: usize = 100;
pub const DEFAULT_TRACE_SNIPPET_LINES: usize = 5;

// TF-IDF
pub const DEFAULT_TFIDF_MAX_FEATURES: usize = 1000;
pub const DEFAULT_TFIDF_NGRAM_RANGE: (usize, usize) = (1, 2);
pub const DEFAULT_TFIDF_MIN_TOKEN_LEN: usize = 2;

// Matcher
pub const DEFAULT_MIN_SCORE: f64 = 0.15;
pub const DEFAULT_MAX_RESULTS: usize = 5;
pub const DEFAULT_TIER1_SCORE: f64 = 1.0;
pub const DEFAULT_TIER2_MIN_LINES: usize = 2;
pub const DEFAULT_TIER2_LINE_THRESHOLD: f64 = 0.80;
pub const DEFAULT_TIER2_FUZZY_WORD_THRESHOLD: f64 = 0.75;
pub const DEFAULT_TIER2_FUZZY_MIN_WORDS: usize = 2;
pub const DEFAULT_TIER2_SCORE_FLOOR: f64 = 0.70;
pub const DEFAULT_TIER2_SCORE_CEILING: f64 = 0.95;
pub const DEFAULT_TIER3_SCORE_CAP: f64 = 0.50;
pub const DEFAULT_EXAMPLE_WEIGHT: f64 = 0.8;
pub const DEFAULT_TITLE_DESC_WEIGHT: f64 = 0.2;

// Pipeline
pub const DEFAULT_CLUSTERING_ENABLED: bool = true;
pub const DEFAULT_KB_ENABLED: bool = true;
pub const DEFAULT_LLM_ENABLED: bool = false;
pub const DEFAULT_PUSH_ENABLED: bool = false;
pub const DEFAULT_LOG_EXTRACTION_ENABLED: bool = true;
pub const DEFAULT_MAX_PROMPT_MATCHES: usize = 3;

// Knowledge base
pub const DEFAULT_KB_PATH: &str = "knowledge_base";
pub const DEFAULT_KB_CACHE_CAPACITY: u64 = 16;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
