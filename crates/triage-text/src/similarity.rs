//! Cosine similarity over sparse TF-IDF vectors.

use crate::tfidf::SparseVector;

/// Cosine similarity, clamped to [0, 1]. Zero-magnitude vectors give 0.0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < f64::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(0.0, 1.0)
}

/// Cosine distance `1 - similarity`, clipped to [0, 1].
pub fn cosine_distance(a: &SparseVector, b: &SparseVector) -> f64 {
    (1.0 - cosine_similarity(a, b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = SparseVector::from_pairs(vec![(0, 1.0), (3, 2.0)]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
        assert!(cosine_distance(&v, &v).abs() < 1e-9);
    }

    #[test]
    fn disjoint_vectors_have_similarity_zero() {
        let a = SparseVector::from_pairs(vec![(0, 1.0)]);
        let b = SparseVector::from_pairs(vec![(1, 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_distance(&a, &b), 1.0);
    }

    #[test]
    fn empty_vectors_return_zero() {
        let empty = SparseVector::default();
        let v = SparseVector::from_pairs(vec![(2, 0.5)]);
        assert_eq!(cosine_similarity(&empty, &v), 0.0);
        assert_eq!(cosine_distance(&empty, &empty), 1.0);
    }
}
