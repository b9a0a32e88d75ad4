//! TF-IDF vectorization over word n-grams.

mod sparse;
mod vectorizer;

pub use sparse::SparseVector;
pub use vectorizer::TfIdfVectorizer;

/// Vectorizer failures. Callers turn these into fallback behaviour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorizeError {
    #[error("empty vocabulary: documents contain no tokens")]
    EmptyVocabulary,

    #[error("vectorizer used before fit")]
    NotFitted,
}
