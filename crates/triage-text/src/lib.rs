//! # triage-text
//!
//! Text primitives shared by clustering and knowledge-base matching:
//! volatile-data normalization, error fingerprints, word tokenization,
//! TF-IDF vectors and cosine similarity.

pub mod fingerprint;
pub mod normalize;
pub mod similarity;
pub mod tfidf;
pub mod tokenize;

pub use fingerprint::compute_fingerprint;
pub use normalize::{collapse_whitespace, normalize, normalize_collapsed};
pub use similarity::cosine_similarity;
pub use tfidf::{SparseVector, TfIdfVectorizer, VectorizeError};
