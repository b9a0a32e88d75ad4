//! Pairwise cosine-distance matrix.

use triage_text::similarity::cosine_distance;
use triage_text::SparseVector;

/// Symmetric `n x n` distance matrix with a zero diagonal, stored densely.
/// Every entry is in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Cosine distances between every pair of vectors.
    pub fn from_vectors(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cosine_distance(&vectors[i], &vectors[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Build from explicit rows. Values are clipped to [0, 1] and the
    /// diagonal is forced to zero. Returns `None` unless the rows are square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|r| r.len() != n) {
            return None;
        }
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            for (j, &d) in row.iter().enumerate() {
                data.push(if i == j { 0.0 } else { d.clamp(0.0, 1.0) });
            }
        }
        Some(Self { n, data })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Dense row-major copy, used as scratch space by the linkage.
    pub(crate) fn to_dense(&self) -> Vec<f64> {
        self.data.clone()
    }
}
