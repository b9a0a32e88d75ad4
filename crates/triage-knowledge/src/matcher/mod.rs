//! Three-tier knowledge-base matcher.
//!
//! Per entry, tiers run top-down and stop at the first one that clears
//! `min_score`: exact substring (fixed score), line overlap (interpolated
//! between floor and ceiling), then TF-IDF cosine similarity capped below the
//! tier-2 floor. A lower tier can therefore never outrank a higher one.

pub mod tiers;

use tracing::debug;

use triage_core::config::MatcherConfig;
use triage_core::constants::LOG_PREVIEW_CHARS;
use triage_core::errors::ConfigError;
use triage_core::models::{FeedbackFilter, KnowledgeEntry, MatchResult, MatchTier};
use triage_observability::events;
use triage_text::{cosine_similarity, normalize, SparseVector, TfIdfVectorizer};

use tiers::{exact_substring, line_overlap, PreparedQuery};

const BOOSTED_NOTE: &str = "feedback: boosted";

/// Ranks knowledge entries against failure text.
///
/// `fit` is optional: without it, tier 3 fits a throwaway vectorizer per
/// query. A fitted matcher must not be refitted while another thread matches
/// through it; `fit` takes `&mut self` for that reason.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    config: MatcherConfig,
    fitted: Option<TfIdfVectorizer>,
}

/// A scored entry before filtering.
struct Candidate<'a> {
    index: usize,
    entry: &'a KnowledgeEntry,
    score: f64,
    tier: MatchTier,
    details: Vec<String>,
    boosted: bool,
}

impl TextMatcher {
    pub fn new(config: MatcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            fitted: None,
        })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Pre-fit the tier-3 vocabulary on a static corpus so repeated queries
    /// share one IDF weighting. If the corpus has no usable terms the matcher
    /// stays unfitted and falls back to per-query fitting.
    pub fn fit(&mut self, entries: &[KnowledgeEntry]) {
        let corpus = tier3_corpus(&entries.iter().collect::<Vec<_>>());
        let mut vectorizer = TfIdfVectorizer::new(self.config.tfidf.clone());
        match vectorizer.fit(&corpus) {
            Ok(()) => {
                debug!(
                    entries = entries.len(),
                    vocabulary = vectorizer.vocabulary_len(),
                    "matcher vocabulary fitted"
                );
                self.fitted = Some(vectorizer);
            }
            Err(e) => {
                events::degradation_triggered("matcher.fit", &e.to_string(), "per-query fitting");
                self.fitted = None;
            }
        }
    }

    /// Ranked matches for `query`. Empty for blank queries or no entries.
    pub fn match_text(
        &self,
        query: &str,
        entries: &[KnowledgeEntry],
        query_label: Option<&str>,
    ) -> Vec<MatchResult> {
        self.match_with_feedback(query, entries, &FeedbackFilter::default(), query_label)
    }

    /// Like [`match_text`](Self::match_text), with user feedback applied:
    /// excluded entries never appear; boosted entries survive `min_score`
    /// when any tier scored them above zero and win ties. Scores are untouched.
    pub fn match_with_feedback(
        &self,
        query: &str,
        entries: &[KnowledgeEntry],
        feedback: &FeedbackFilter,
        query_label: Option<&str>,
    ) -> Vec<MatchResult> {
        let label = query_label.unwrap_or("?");
        let span = triage_observability::matching_span!(label, entries.len());
        let _guard = span.enter();

        if query.trim().is_empty() || entries.is_empty() {
            return Vec::new();
        }
        let prepared = PreparedQuery::new(query);
        if prepared.is_empty() {
            return Vec::new();
        }

        let min_score = self.config.min_score;
        let mut candidates: Vec<Candidate<'_>> = Vec::new();
        let mut unresolved: Vec<(usize, &KnowledgeEntry, Option<Candidate<'_>>)> = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            if feedback.is_excluded(&entry.id) {
                continue;
            }
            let boosted = feedback.is_boosted(&entry.id);

            if exact_substring(&entry.error_example, &prepared) {
                candidates.push(Candidate {
                    index,
                    entry,
                    score: self.config.tier1_score,
                    tier: MatchTier::ExactSubstring,
                    details: vec!["error example found verbatim in failure text".to_string()],
                    boosted,
                });
                continue;
            }

            let tier2 = line_overlap(&entry.error_example, &prepared, &self.config).map(|hit| {
                Candidate {
                    index,
                    entry,
                    score: hit.score,
                    tier: MatchTier::LineOverlap,
                    details: vec![format!(
                        "lines matched: {}/{} ({:.0}%)",
                        hit.matched_lines,
                        hit.total_lines,
                        hit.fraction() * 100.0
                    )],
                    boosted,
                }
            });
            match tier2 {
                Some(hit) if hit.score >= min_score => candidates.push(hit),
                other => unresolved.push((index, entry, other)),
            }
        }

        if !unresolved.is_empty() {
            let pending: Vec<&KnowledgeEntry> = unresolved.iter().map(|(_, e, _)| *e).collect();
            let tier3 = self.tier3_scores(&prepared, &pending, label);
            for ((index, entry, tier2), scored) in unresolved.into_iter().zip(tier3) {
                let boosted = feedback.is_boosted(&entry.id);
                let tfidf = scored.map(|(score, details)| Candidate {
                    index,
                    entry,
                    score,
                    tier: MatchTier::TfIdf,
                    details,
                    boosted,
                });
                let best = match (tier2, tfidf) {
                    (Some(a), Some(b)) => Some(if b.score > a.score { b } else { a }),
                    (a, b) => a.or(b),
                };
                candidates.extend(best);
            }
        }

        let results = self.assemble(candidates);
        if results.is_empty() {
            debug!(
                query = %label,
                query_len = query.len(),
                head = %preview_head(query, LOG_PREVIEW_CHARS),
                tail = %preview_tail(query, LOG_PREVIEW_CHARS),
                "no knowledge-base match"
            );
        }
        results
    }

    /// Filter, rank and truncate. Boosted entries bypass `min_score` when
    /// their score is positive. Scores stay exactly as the tier produced them;
    /// only the `matched_on` text is rounded.
    fn assemble(&self, candidates: Vec<Candidate<'_>>) -> Vec<MatchResult> {
        let mut kept: Vec<Candidate<'_>> = candidates
            .into_iter()
            .filter(|c| c.score >= self.config.min_score || (c.boosted && c.score > 0.0))
            .collect();
        kept.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.boosted.cmp(&a.boosted))
                .then_with(|| a.index.cmp(&b.index))
        });
        kept.truncate(self.config.max_results);

        kept.into_iter()
            .map(|c| {
                let mut matched_on = Vec::with_capacity(c.details.len() + 2);
                matched_on.push(format!("{} (score {:.2})", c.tier, c.score));
                matched_on.extend(c.details);
                if c.boosted {
                    matched_on.push(BOOSTED_NOTE.to_string());
                }
                debug!(
                    entry = %c.entry.id,
                    tier = c.tier.number(),
                    score = c.score,
                    "knowledge-base match"
                );
                MatchResult {
                    entry: c.entry.clone(),
                    score: c.score,
                    tier: c.tier,
                    matched_on,
                }
            })
            .collect()
    }

    /// Tier-3 score and explanation per pending entry, `None` where the
    /// blended similarity is zero. Any vectorizer failure yields no scores.
    fn tier3_scores(
        &self,
        query: &PreparedQuery,
        pending: &[&KnowledgeEntry],
        label: &str,
    ) -> Vec<Option<(f64, Vec<String>)>> {
        let vectors = match &self.fitted {
            Some(vectorizer) => transform_all(vectorizer, query, pending),
            None => {
                let mut corpus = vec![query.normalized.clone()];
                corpus.extend(tier3_corpus(pending));
                let mut vectorizer = TfIdfVectorizer::new(self.config.tfidf.clone());
                vectorizer.fit(&corpus).and_then(|()| transform_all(&vectorizer, query, pending))
            }
        };
        let (query_vec, entry_vecs) = match vectors {
            Ok(v) => v,
            Err(e) => {
                debug!(query = %label, error = %e, "tier 3 skipped");
                return vec![None; pending.len()];
            }
        };

        entry_vecs
            .iter()
            .map(|(example_vec, title_vec)| {
                let example_sim = cosine_similarity(&query_vec, example_vec);
                let title_sim = cosine_similarity(&query_vec, title_vec);
                let blended = self.config.example_weight * example_sim
                    + self.config.title_desc_weight * title_sim;
                if blended <= 0.0 {
                    return None;
                }
                let score = blended.min(self.config.tier3_score_cap);
                Some((
                    score,
                    vec![format!(
                        "TF-IDF similarity: {example_sim:.2} (example), {title_sim:.2} (title+desc), blended={blended:.2}"
                    )],
                ))
            })
            .collect()
    }
}

type EntryVectors = (SparseVector, SparseVector);

fn transform_all(
    vectorizer: &TfIdfVectorizer,
    query: &PreparedQuery,
    entries: &[&KnowledgeEntry],
) -> Result<(SparseVector, Vec<EntryVectors>), triage_text::VectorizeError> {
    let query_vec = vectorizer.transform(&query.normalized)?;
    let entry_vecs = entries
        .iter()
        .map(|entry| {
            Ok((
                vectorizer.transform(&normalize(&entry.error_example))?,
                vectorizer.transform(&entry.title_and_description())?,
            ))
        })
        .collect::<Result<Vec<_>, triage_text::VectorizeError>>()?;
    Ok((query_vec, entry_vecs))
}

/// Normalized examples followed by title + description texts.
fn tier3_corpus(entries: &[&KnowledgeEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| normalize(&e.error_example))
        .chain(entries.iter().map(|e| e.title_and_description()))
        .collect()
}

/// First `max_chars` characters on one line.
fn preview_head(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect::<String>().replace('\n', " ")
}

/// Last `max_chars` characters on one line.
fn preview_tail(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    text.chars()
        .skip(count.saturating_sub(max_chars))
        .collect::<String>()
        .replace('\n', " ")
}
