use std::collections::{BTreeMap, HashMap};

use triage_core::config::TfIdfConfig;

use super::{SparseVector, VectorizeError};
use crate::tokenize::{ngrams, word_tokens};

/// TF-IDF vectorizer with a capped vocabulary and smoothed IDF.
///
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, output vectors are L2-normalized.
/// When the vocabulary exceeds `max_features`, the most frequent terms across
/// the corpus are kept, ties broken alphabetically.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    config: TfIdfConfig,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    pub fn new(config: TfIdfConfig) -> Self {
        Self {
            config,
            vocabulary: BTreeMap::new(),
            idf: Vec::new(),
        }
    }

    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// Split a document into its n-gram terms.
    pub fn analyze(&self, doc: &str) -> Vec<String> {
        let tokens = word_tokens(doc, self.config.min_token_len, self.config.lowercase);
        let (min_n, max_n) = self.config.ngram_range;
        ngrams(&tokens, min_n, max_n)
    }

    /// Learn vocabulary and IDF weights. On error the previous fit is kept.
    pub fn fit<S: AsRef<str>>(&mut self, docs: &[S]) -> Result<(), VectorizeError> {
        let analyzed: Vec<Vec<String>> = docs.iter().map(|d| self.analyze(d.as_ref())).collect();
        self.fit_analyzed(&analyzed)
    }

    /// Vectorize one document against the fitted vocabulary. Unknown terms
    /// are ignored, so a document may map to the zero vector.
    pub fn transform(&self, doc: &str) -> Result<SparseVector, VectorizeError> {
        if !self.is_fitted() {
            return Err(VectorizeError::NotFitted);
        }
        Ok(self.vectorize(&self.analyze(doc)))
    }

    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        docs: &[S],
    ) -> Result<Vec<SparseVector>, VectorizeError> {
        let analyzed: Vec<Vec<String>> = docs.iter().map(|d| self.analyze(d.as_ref())).collect();
        self.fit_analyzed(&analyzed)?;
        Ok(analyzed.iter().map(|terms| self.vectorize(terms)).collect())
    }

    fn fit_analyzed(&mut self, analyzed: &[Vec<String>]) -> Result<(), VectorizeError> {
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
        for terms in analyzed {
            for (term, count) in term_counts(terms) {
                *doc_freq.entry(term).or_insert(0) += 1;
                let weight = if self.config.binary_tf { 1 } else { count };
                *corpus_freq.entry(term).or_insert(0) += weight;
            }
        }
        if doc_freq.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let mut ranked: Vec<(&str, usize)> = corpus_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.config.max_features);

        let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort_unstable();

        let n_docs = analyzed.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(kept.len());
        for (index, term) in kept.into_iter().enumerate() {
            let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term.to_string(), index);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        Ok(())
    }

    fn vectorize(&self, terms: &[String]) -> SparseVector {
        let pairs = term_counts(terms)
            .into_iter()
            .filter_map(|(term, count)| {
                let &index = self.vocabulary.get(term)?;
                let tf = if self.config.binary_tf { 1.0 } else { count as f64 };
                Some((index, tf * self.idf[index]))
            })
            .collect();
        SparseVector::from_pairs(pairs).l2_normalized()
    }
}

fn term_counts(terms: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}
