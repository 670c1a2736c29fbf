//! Weighted candidate edges.

use std::cmp::Ordering;

use crate::graph::VertexId;

/// An undirected weighted edge recorded from one endpoint's point of view.
///
/// `v1` is the endpoint whose partial tree inserted the edge and `v2` the far
/// endpoint. Edges order by `(weight, sequence)`; `sequence` is the insertion
/// counter assigned during initialisation, so equal weights resolve in
/// insertion order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    v1: VertexId,
    v2: VertexId,
    weight: u32,
    sequence: u64,
}

impl Edge {
    /// Creates an edge.
    #[must_use]
    pub const fn new(v1: VertexId, v2: VertexId, weight: u32, sequence: u64) -> Self {
        Self {
            v1,
            v2,
            weight,
            sequence,
        }
    }

    /// Returns the near endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v1(&self) -> VertexId { self.v1 }

    /// Returns the far endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v2(&self) -> VertexId { self.v2 }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }

    /// Returns the insertion sequence used for tie-breaking.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> u64 { self.sequence }

    /// Returns the endpoints in canonical `(min, max)` order.
    #[must_use]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        if self.v1 <= self.v2 {
            (self.v1, self.v2)
        } else {
            (self.v2, self.v1)
        }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .then_with(|| (self.v1, self.v2).cmp(&(other.v1, other.v2)))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
