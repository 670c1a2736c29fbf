//! Spanning tree returned by the merge loop.

use crate::edge::Edge;

/// Edges accepted by the merge loop.
///
/// For a connected graph of `n` vertices this holds exactly `n - 1` edges.
/// The edge set carries no intrinsic order; [`Self::edges`] reports it sorted
/// by `(weight, endpoints)` so output is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: u64,
}

impl SpanningTree {
    pub(crate) fn from_edges(mut edges: Vec<Edge>) -> Self {
        edges.sort_unstable_by_key(|edge| (edge.weight(), edge.endpoints(), edge.sequence()));
        let total_weight = edges.iter().map(|edge| u64::from(edge.weight())).sum();
        Self {
            edges,
            total_weight,
        }
    }

    /// Returns the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the tree, returning its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<Edge> { self.edges }

    /// Sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> u64 { self.total_weight }

    /// Number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }
}
