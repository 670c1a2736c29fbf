//! Sequential Kruskal oracle for merge loop property verification.
//!
//! Provides a simple, trusted implementation of Kruskal's algorithm over the
//! raw fixture edges. The merge loop may pick different edges on ties, so
//! comparisons are made on total weight and edge count only.

use std::cmp::Ordering;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: u64,
    /// Number of edges in the minimum spanning forest.
    pub edge_count: usize,
    /// Number of connected components after construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal's algorithm.
///
/// Self-loops and out-of-range endpoints are ignored.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &[(usize, usize, u32)],
) -> SequentialMstResult {
    let mut sorted: Vec<(usize, usize, u32)> = edges
        .iter()
        .copied()
        .filter(|&(a, b, _)| a != b && a < vertex_count && b < vertex_count)
        .collect();
    sorted.sort_unstable_by(cmp_edge);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank: Vec<usize> = vec![0; vertex_count];
    let mut components = vertex_count;
    let mut total_weight = 0_u64;
    let mut edge_count = 0_usize;

    for (a, b, weight) in sorted {
        let ra = find_root(&mut parent, a);
        let rb = find_root(&mut parent, b);
        if ra != rb {
            union_by_rank(&mut parent, &mut rank, ra, rb);
            total_weight += u64::from(weight);
            edge_count += 1;
            components -= 1;
        }
    }

    SequentialMstResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}

/// Orders edges by weight, then by endpoints for reproducibility.
fn cmp_edge(a: &(usize, usize, u32), b: &(usize, usize, u32)) -> Ordering {
    a.2.cmp(&b.2)
        .then_with(|| a.0.cmp(&b.0))
        .then_with(|| a.1.cmp(&b.1))
}

/// Selects the root and child for a union operation.
///
/// Prefers the node with the higher rank; when ranks are equal, the
/// smaller index becomes root.
fn choose_root(rank: &[usize], a: usize, b: usize) -> (usize, usize) {
    match rank[a].cmp(&rank[b]) {
        Ordering::Greater => (a, b),
        Ordering::Less => (b, a),
        Ordering::Equal if a <= b => (a, b),
        Ordering::Equal => (b, a),
    }
}

/// Union by rank, breaking ties by smaller index.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let (root, child) = choose_root(rank, a, b);
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
