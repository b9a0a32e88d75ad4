//! Tier 1 and tier 2 scoring. Both work on normalized, whitespace-collapsed
//! text so volatile values and indentation never decide a match.

use std::collections::HashSet;

use triage_core::config::MatcherConfig;
use triage_text::normalize_collapsed;

/// A query prepared once and reused for every entry.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    /// Normalized, whitespace-collapsed query.
    pub collapsed: String,
    /// Lowercased whitespace-separated words of `collapsed`, for fuzzy
    /// line matching. Words match whole, never as substrings.
    pub words: HashSet<String>,
    /// Normalized query with line structure kept, for TF-IDF.
    pub normalized: String,
}

impl PreparedQuery {
    pub fn new(text: &str) -> Self {
        let collapsed = normalize_collapsed(text);
        let words = collapsed
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        Self {
            collapsed,
            words,
            normalized: triage_text::normalize(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }
}

/// Tier 1: the whole normalized example occurs verbatim in the query.
pub fn exact_substring(error_example: &str, query: &PreparedQuery) -> bool {
    let example = normalize_collapsed(error_example);
    !example.is_empty() && query.collapsed.contains(&example)
}

/// Outcome of a tier-2 attempt that cleared the line threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineOverlap {
    pub matched_lines: usize,
    pub total_lines: usize,
    pub score: f64,
}

impl LineOverlap {
    pub fn fraction(&self) -> f64 {
        self.matched_lines as f64 / self.total_lines as f64
    }
}

/// Tier 2: enough example lines occur in the query, verbatim or fuzzily.
///
/// Returns `None` for examples shorter than `tier2_min_lines` or when the
/// matching fraction stays below `tier2_line_threshold`.
pub fn line_overlap(
    error_example: &str,
    query: &PreparedQuery,
    config: &MatcherConfig,
) -> Option<LineOverlap> {
    let lines: Vec<String> = error_example
        .lines()
        .map(normalize_collapsed)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < config.tier2_min_lines {
        return None;
    }

    let matched_lines = lines
        .iter()
        .filter(|line| line_matches(line, query, config))
        .count();
    let overlap = LineOverlap {
        matched_lines,
        total_lines: lines.len(),
        score: 0.0,
    };
    let fraction = overlap.fraction();
    if fraction < config.tier2_line_threshold {
        return None;
    }

    Some(LineOverlap {
        score: interpolate(fraction, config),
        ..overlap
    })
}

fn line_matches(line: &str, query: &PreparedQuery, config: &MatcherConfig) -> bool {
    if query.collapsed.contains(line) {
        return true;
    }
    let lowered = line.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.len() < config.tier2_fuzzy_min_words {
        return false;
    }
    let found = words.iter().filter(|w| query.words.contains(**w)).count();
    found as f64 / words.len() as f64 >= config.tier2_fuzzy_word_threshold
}

/// Threshold maps to the floor, a full match to the ceiling.
fn interpolate(fraction: f64, config: &MatcherConfig) -> f64 {
    let (floor, ceiling) = (config.tier2_score_floor, config.tier2_score_ceiling);
    let span = 1.0 - config.tier2_line_threshold;
    if span <= f64::EPSILON {
        return ceiling;
    }
    let t = ((fraction - config.tier2_line_threshold) / span).clamp(0.0, 1.0);
    floor + (ceiling - floor) * t
}
