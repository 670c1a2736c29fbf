//! Seeded synthetic graphs for benchmarks.
//!
//! Every graph is connected: vertices are joined along a shuffled path and
//! then receive extra random edges.

use partree_core::{Graph, GraphBuilder, VertexId};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Configuration for [`generate_graph`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra random edges added per vertex on top of the spanning path.
    pub extra_edges_per_vertex: usize,
    /// Largest edge weight, inclusive.
    pub max_weight: u32,
    /// Seed for the generator.
    pub seed: u64,
}

/// Builds a connected graph with vertices named `v0..v{n-1}`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` or
/// `max_weight` is zero.
///
/// # Examples
/// ```
/// use partree_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let graph = generate_graph(&SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_edges_per_vertex: 2,
///     max_weight: 100,
///     seed: 7,
/// })?;
/// assert_eq!(graph.len(), 10);
/// assert_eq!(graph.edge_count(), 9 + 20);
/// # Ok::<(), partree_benches::error::BenchSetupError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    if config.max_weight == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "max_weight",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut builder = GraphBuilder::new();
    let mut order = Vec::with_capacity(config.vertex_count);
    for index in 0..config.vertex_count {
        order.push(builder.add_vertex(format!("v{index}"))?);
    }
    order.shuffle(&mut rng);

    for pair in order.windows(2) {
        if let [a, b] = *pair {
            builder.add_edge(a, b, rng.gen_range(1..=config.max_weight))?;
        }
    }

    let extra = config
        .vertex_count
        .saturating_mul(config.extra_edges_per_vertex);
    for _ in 0..extra {
        let a = VertexId::new(rng.gen_range(0..config.vertex_count));
        let b = VertexId::new(rng.gen_range(0..config.vertex_count));
        builder.add_edge(a, b, rng.gen_range(1..=config.max_weight))?;
    }

    Ok(builder.build())
}
