//! Shared test utilities for `partree-core`.

use partree_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{Graph, GraphBuilder, VertexId};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `PARTREE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph with vertices named `v0..v{n-1}` and the given undirected
/// `(a, b, weight)` edges.
///
/// # Panics
/// Panics when an edge references a vertex outside `0..vertex_count`.
#[must_use]
pub(crate) fn indexed_graph(vertex_count: usize, edges: &[(usize, usize, u32)]) -> Graph {
    let mut builder = GraphBuilder::new();
    for index in 0..vertex_count {
        if let Err(err) = builder.add_vertex(format!("v{index}")) {
            panic!("generated vertex names must be unique: {err}");
        }
    }
    for &(a, b, weight) in edges {
        if let Err(err) = builder.add_edge(VertexId::new(a), VertexId::new(b), weight) {
            panic!("edge ({a}, {b}) must reference existing vertices: {err}");
        }
    }
    builder.build()
}

/// Builds a graph from named vertices and named edges.
///
/// # Panics
/// Panics when a name is duplicated or an edge names an unknown vertex.
#[must_use]
pub(crate) fn named_graph(names: &[&str], edges: &[(&str, &str, u32)]) -> Graph {
    let mut builder = GraphBuilder::new();
    for &name in names {
        if let Err(err) = builder.add_vertex(name) {
            panic!("vertex `{name}` must insert: {err}");
        }
    }
    for &(a, b, weight) in edges {
        if let Err(err) = builder.add_edge_by_name(a, b, weight) {
            panic!("edge ({a}, {b}) must insert: {err}");
        }
    }
    builder.build()
}
