//! Type definitions for merge loop property tests.
//!
//! Provides the fixture, configuration, and weight distribution types used
//! by the graph generation strategies and property functions.

use crate::{graph::Graph, test_utils::indexed_graph};

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights and topology are chosen during generation,
/// producing inputs that stress different parts of the merge loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight, so the minimum spanning tree is unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph: a random spanning path plus roughly `0.5n` to `n` extras.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple components with no cross-component edges.
    Disconnected,
}

impl WeightDistribution {
    /// Returns `true` when fixtures of this distribution are connected.
    pub(super) const fn is_connected(self) -> bool {
        !matches!(self, Self::Disconnected)
    }
}

/// Fixture for merge loop property tests.
///
/// Captures the vertex count, generated undirected edges, and the weight
/// distribution used during generation, providing full context for failure
/// diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated `(a, b, weight)` edges.
    pub edges: Vec<(usize, usize, u32)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Materialises the fixture as a [`Graph`].
    pub(super) fn graph(&self) -> Graph {
        indexed_graph(self.vertex_count, &self.edges)
    }

    /// Short description appended to failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Configuration for the repeated-run agreement property.
pub(super) struct AgreementConfig {
    /// Number of times to repeat the computation per input and linkage.
    pub repetitions: usize,
}

impl AgreementConfig {
    /// Loads the configuration from environment variables, falling back to
    /// sensible defaults.
    ///
    /// The environment variable `PARTREE_MST_PBT_REPETITIONS` controls the
    /// repetition count (default: 3).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("PARTREE_MST_PBT_REPETITIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);
        Self { repetitions }
    }
}
