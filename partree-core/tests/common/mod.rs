use partree_core::{Graph, GraphBuilder, GraphError};

/// Builds a graph from vertex names and named `(a, b, weight)` edges.
pub fn build_graph(names: &[&str], edges: &[(&str, &str, u32)]) -> Result<Graph, GraphError> {
    let mut builder = GraphBuilder::new();
    for &name in names {
        builder.add_vertex(name)?;
    }
    for &(a, b, weight) in edges {
        builder.add_edge_by_name(a, b, weight)?;
    }
    Ok(builder.build())
}

/// The four-vertex square with diagonal used across the suites. Its minimum
/// spanning tree is `A-B 1`, `B-C 2`, `C-D 3`.
pub fn square_with_diagonal() -> Graph {
    build_graph(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1),
            ("B", "C", 2),
            ("C", "D", 3),
            ("A", "D", 10),
            ("A", "C", 5),
        ],
    )
    .expect("fixture graph must build")
}
