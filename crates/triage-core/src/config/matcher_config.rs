use serde::{Deserialize, Serialize};

use super::{defaults, ensure_min, ensure_range, TfIdfConfig};
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigError;

/// Knowledge-base matcher configuration.
///
/// Tier bounds are validated so that any tier-1 score outranks any tier-2
/// score, which in turn outranks any tier-3 score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Results scoring below this are dropped.
    pub min_score: f64,
    /// Maximum number of results returned per query.
    pub max_results: usize,
    /// Vectorizer used by the tier-3 fallback.
    pub tfidf: TfIdfConfig,

    /// Fixed score of an exact-substring (tier 1) match.
    pub tier1_score: f64,

    /// Examples with fewer non-empty lines skip tier 2.
    pub tier2_min_lines: usize,
    /// Fraction of example lines that must match for tier 2 to fire.
    pub tier2_line_threshold: f64,
    /// Fraction of a line's words that must appear in the query for a fuzzy line match.
    pub tier2_fuzzy_word_threshold: f64,
    /// Lines with fewer words can only match verbatim.
    pub tier2_fuzzy_min_words: usize,
    /// Tier-2 score when the match fraction sits exactly at the threshold.
    pub tier2_score_floor: f64,
    /// Tier-2 score when every line matches.
    pub tier2_score_ceiling: f64,

    /// Upper bound on any tier-3 score.
    pub tier3_score_cap: f64,
    /// Weight of the error-example similarity in the tier-3 blend.
    pub example_weight: f64,
    /// Weight of the title + description similarity in the tier-3 blend.
    pub title_desc_weight: f64,
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_range("matcher.min_score", self.min_score, 0.0, 1.0)?;
        ensure_min("matcher.max_results", self.max_results, 1)?;
        self.tfidf.validate()?;

        ensure_range("matcher.tier1_score", self.tier1_score, 0.0, 1.0)?;
        ensure_min("matcher.tier2_min_lines", self.tier2_min_lines, 1)?;
        ensure_range(
            "matcher.tier2_line_threshold",
            self.tier2_line_threshold,
            0.0,
            1.0,
        )?;
        ensure_range(
            "matcher.tier2_fuzzy_word_threshold",
            self.tier2_fuzzy_word_threshold,
            0.0,
            1.0,
        )?;
        ensure_min(
            "matcher.tier2_fuzzy_min_words",
            self.tier2_fuzzy_min_words,
            1,
        )?;
        ensure_range("matcher.tier2_score_floor", self.tier2_score_floor, 0.0, 1.0)?;
        ensure_range(
            "matcher.tier2_score_ceiling",
            self.tier2_score_ceiling,
            0.0,
            1.0,
        )?;
        ensure_range("matcher.tier3_score_cap", self.tier3_score_cap, 0.0, 1.0)?;

        if self.tier2_score_floor > self.tier2_score_ceiling {
            return Err(ConfigError::InvertedBounds {
                lower_name: "matcher.tier2_score_floor",
                lower: self.tier2_score_floor,
                upper_name: "matcher.tier2_score_ceiling",
                upper: self.tier2_score_ceiling,
            });
        }
        if self.tier2_score_ceiling > self.tier1_score {
            return Err(ConfigError::InvertedBounds {
                lower_name: "matcher.tier2_score_ceiling",
                lower: self.tier2_score_ceiling,
                upper_name: "matcher.tier1_score",
                upper: self.tier1_score,
            });
        }
        if self.tier3_score_cap >= self.tier2_score_floor {
            return Err(ConfigError::InvertedBounds {
                lower_name: "matcher.tier3_score_cap",
                lower: self.tier3_score_cap,
                upper_name: "matcher.tier2_score_floor",
                upper: self.tier2_score_floor,
            });
        }

        ensure_range("matcher.example_weight", self.example_weight, 0.0, 1.0)?;
        ensure_range("matcher.title_desc_weight", self.title_desc_weight, 0.0, 1.0)?;
        let sum = self.example_weight + self.title_desc_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum {
                names: "matcher.example_weight + matcher.title_desc_weight",
                sum,
            });
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_score: defaults::DEFAULT_MIN_SCORE,
            max_results: defaults::DEFAULT_MAX_RESULTS,
            tfidf: TfIdfConfig::default(),
            tier1_score: defaults::DEFAULT_TIER1_SCORE,
            tier2_min_lines: defaults::DEFAULT_TIER2_MIN_LINES,
            tier2_line_threshold: defaults::DEFAULT_TIER2_LINE_THRESHOLD,
            tier2_fuzzy_word_threshold: defaults::DEFAULT_TIER2_FUZZY_WORD_THRESHOLD,
            tier2_fuzzy_min_words: defaults::DEFAULT_TIER2_FUZZY_MIN_WORDS,
            tier2_score_floor: defaults::DEFAULT_TIER2_SCORE_FLOOR,
            tier2_score_ceiling: defaults::DEFAULT_TIER2_SCORE_CEILING,
            tier3_score_cap: defaults::DEFAULT_TIER3_SCORE_CAP,
            example_weight: defaults::DEFAULT_EXAMPLE_WEIGHT,
            title_desc_weight: defaults::DEFAULT_TITLE_DESC_WEIGHT,
        }
    }
}
