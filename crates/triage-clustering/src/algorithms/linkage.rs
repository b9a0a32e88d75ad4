//! Complete-linkage agglomerative clustering.
//!
//! Uses the nearest-neighbour chain algorithm: O(n²) time over a dense
//! scratch matrix, exact for complete linkage because it is reducible.
//! Cluster distances are updated with the Lance-Williams rule
//! `d(k, a ∪ b) = max(d(k, a), d(k, b))`.

use super::union_find::UnionFind;
use crate::distance::DistanceMatrix;

/// Slack on the cut height so floating-point noise in the cosine of two
/// identical documents cannot keep them apart at threshold 1.0.
const CUT_TOLERANCE: f64 = 1e-9;

/// One agglomeration step. `left`/`right` are point indices, one from each
/// merged cluster; `height` is the complete-linkage distance between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    pub left: usize,
    pub right: usize,
    pub height: f64,
    /// Number of points in the merged cluster.
    pub size: usize,
}

/// Build the full dendrogram: `n - 1` merges sorted by height ascending.
pub fn complete_linkage(distances: &DistanceMatrix) -> Vec<Merge> {
    let n = distances.len();
    if n < 2 {
        return Vec::new();
    }

    let mut d = distances.to_dense();
    let mut active = vec![true; n];
    let mut size = vec![1usize; n];
    let mut merges = Vec::with_capacity(n - 1);
    let mut chain: Vec<usize> = Vec::with_capacity(n);

    while merges.len() < n - 1 {
        if chain.is_empty() {
            match active.iter().position(|&a| a) {
                Some(first) => chain.push(first),
                None => break,
            }
        }

        let Some(&a) = chain.last() else { break };
        let prev = chain.len().checked_sub(2).map(|i| chain[i]);

        // Nearest active neighbour of `a`. The chain predecessor wins ties,
        // which is what makes reciprocal pairs terminate the chain.
        let mut best = prev;
        let mut best_d = prev.map_or(f64::INFINITY, |p| d[a * n + p]);
        for (j, &is_active) in active.iter().enumerate() {
            if !is_active || j == a {
                continue;
            }
            let dj = d[a * n + j];
            if dj < best_d {
                best = Some(j);
                best_d = dj;
            }
        }

        let Some(b) = best else { break };
        if Some(b) != prev {
            chain.push(b);
            continue;
        }

        // `a` and `b` are reciprocal nearest neighbours: merge into the lower slot.
        chain.truncate(chain.len() - 2);
        let (keep, drop) = if a < b { (a, b) } else { (b, a) };
        for k in 0..n {
            if !active[k] || k == keep || k == drop {
                continue;
            }
            let merged = d[keep * n + k].max(d[drop * n + k]);
            d[keep * n + k] = merged;
            d[k * n + keep] = merged;
        }
        active[drop] = false;
        size[keep] += size[drop];
        merges.push(Merge {
            left: keep,
            right: drop,
            height: best_d,
            size: size[keep],
        });
    }

    merges.sort_by(|x, y| x.height.total_cmp(&y.height));
    merges
}

/// Cut the dendrogram at `max_height`: points joined by merges at or below
/// the cut share a label. Labels are numbered by first appearance, so point 0
/// always has label 0.
pub fn flat_clusters(n: usize, merges: &[Merge], max_height: f64) -> Vec<usize> {
    let cut = effective_cut(max_height);
    let mut uf = UnionFind::new(n);
    for merge in merges.iter().filter(|m| m.height <= cut) {
        uf.union(merge.left, merge.right);
    }

    let mut root_label: Vec<Option<usize>> = vec![None; n];
    let mut next = 0;
    (0..n)
        .map(|i| {
            let root = uf.find(i);
            *root_label[root].get_or_insert_with(|| {
                next += 1;
                next - 1
            })
        })
        .collect()
}

/// `max_height` plus [`CUT_TOLERANCE`], unless the slack would reach the
/// maximum distance 1.0: documents with nothing in common stay apart.
fn effective_cut(max_height: f64) -> f64 {
    let widened = max_height + CUT_TOLERANCE;
    if widened < 1.0 {
        widened
    } else {
        max_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> DistanceMatrix {
        let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        DistanceMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn fewer_than_two_points_has_no_merges() {
        assert!(complete_linkage(&matrix(&[])).is_empty());
        assert!(complete_linkage(&matrix(&[&[0.0]])).is_empty());
    }

    #[test]
    fn produces_n_minus_one_merges_in_height_order() {
        let m = matrix(&[
            &[0.0, 0.1, 0.8, 0.9],
            &[0.1, 0.0, 0.7, 0.95],
            &[0.8, 0.7, 0.0, 0.2],
            &[0.9, 0.95, 0.2, 0.0],
        ]);
        let merges = complete_linkage(&m);
        assert_eq!(merges.len(), 3);
        let heights: Vec<f64> = merges.iter().map(|m| m.height).collect();
        assert_eq!(heights, vec![0.1, 0.2, 0.95]);
        assert_eq!(merges[2].size, 4);
    }

    #[test]
    fn complete_linkage_uses_maximum_distance() {
        // Single linkage would chain 0-1-2 at 0.3; complete linkage must not.
        let m = matrix(&[
            &[0.0, 0.3, 0.6],
            &[0.3, 0.0, 0.3],
            &[0.6, 0.3, 0.0],
        ]);
        let merges = complete_linkage(&m);
        assert_eq!(merges[0].height, 0.3);
        assert_eq!(merges[1].height, 0.6);
        let labels = flat_clusters(3, &merges, 0.4);
        let distinct: std::collections::BTreeSet<_> = labels.iter().collect();
        assert_eq!(distinct.len(), 2);
    }

    #[test]
    fn cut_groups_points_below_threshold() {
        let m = matrix(&[
            &[0.0, 0.1, 0.8, 0.9],
            &[0.1, 0.0, 0.7, 0.95],
            &[0.8, 0.7, 0.0, 0.2],
            &[0.9, 0.95, 0.2, 0.0],
        ]);
        let merges = complete_linkage(&m);
        assert_eq!(flat_clusters(4, &merges, 0.4), vec![0, 0, 1, 1]);
        assert_eq!(flat_clusters(4, &merges, 0.05), vec![0, 1, 2, 3]);
        assert_eq!(flat_clusters(4, &merges, 1.0), vec![0, 0, 0, 0]);
    }

    #[test]
    fn merges_at_exact_threshold_are_included() {
        let m = matrix(&[&[0.0, 0.4], &[0.4, 0.0]]);
        let merges = complete_linkage(&m);
        assert_eq!(flat_clusters(2, &merges, 0.4), vec![0, 0]);
    }

    #[test]
    fn tolerance_never_admits_maximum_distance() {
        let m = matrix(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let merges = complete_linkage(&m);
        assert_eq!(flat_clusters(2, &merges, 1.0 - 1e-10), vec![0, 1]);
        assert_eq!(flat_clusters(2, &merges, 1.0), vec![0, 0]);
    }

    #[test]
    fn tolerance_absorbs_noise_near_zero() {
        let m = matrix(&[&[0.0, 2e-16], &[2e-16, 0.0]]);
        let merges = complete_linkage(&m);
        assert_eq!(flat_clusters(2, &merges, 0.0), vec![0, 0]);
    }

    #[test]
    fn all_zero_distances_collapse_to_one_cluster() {
        let m = matrix(&[&[0.0; 3], &[0.0; 3], &[0.0; 3]]);
        let merges = complete_linkage(&m);
        assert_eq!(merges.len(), 2);
        assert_eq!(flat_clusters(3, &merges, 0.0), vec![0, 0, 0]);
    }
}
