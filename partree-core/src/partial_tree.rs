//! A connected component under construction.

use std::fmt;

use crate::{
    edge::Edge,
    graph::{Graph, VertexId},
    heap::CandidateHeap,
    linkage::RootForest,
};

/// One component of the spanning forest, identified by its designated root
/// vertex and carrying the candidate edges that may extend it.
///
/// The heap can hold stale edges whose far endpoint already belongs to this
/// tree; they are discarded when extracted.
#[derive(Clone, Debug)]
pub struct PartialTree {
    root: VertexId,
    arcs: CandidateHeap,
    vertex_count: usize,
}

impl PartialTree {
    /// Creates an empty singleton tree rooted at `root`.
    #[must_use]
    pub fn new(root: VertexId) -> Self {
        Self {
            root,
            arcs: CandidateHeap::new(),
            vertex_count: 1,
        }
    }

    /// Builds the singleton tree for `vertex`, inserting one candidate edge
    /// for every adjacency entry.
    ///
    /// `sequence` is the running insertion counter shared by all trees of a
    /// collection; it is advanced once per inserted edge. Returns `None` when
    /// `vertex` is not part of `graph`.
    #[must_use]
    pub fn from_vertex(graph: &Graph, vertex: VertexId, sequence: &mut u64) -> Option<Self> {
        let mut tree = Self::new(vertex);
        for neighbor in graph.vertex(vertex)?.neighbors() {
            tree.arcs
                .insert(Edge::new(vertex, neighbor.vertex(), neighbor.weight(), *sequence));
            *sequence = sequence.saturating_add(1);
        }
        Some(tree)
    }

    /// Returns the designated root vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> VertexId { self.root }

    /// Returns the candidate edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn arcs(&self) -> &CandidateHeap { &self.arcs }

    /// Returns the candidate edges mutably.
    #[rustfmt::skip]
    pub fn arcs_mut(&mut self) -> &mut CandidateHeap { &mut self.arcs }

    /// Number of graph vertices absorbed into this tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Absorbs `other` into `self`.
    ///
    /// The candidate heaps are merged and `other`'s root is linked beneath
    /// this tree's root, so every vertex of `other` resolves to this tree
    /// without being visited.
    pub fn merge(&mut self, other: Self, roots: &mut RootForest) {
        roots.link(self.root, other.root);
        self.arcs.absorb(other.arcs);
        self.vertex_count = self.vertex_count.saturating_add(other.vertex_count);
    }

    /// Returns a [`fmt::Display`] adapter that names vertices via `graph`.
    ///
    /// # Examples
    /// ```
    /// use partree_core::{GraphBuilder, PartialTree};
    ///
    /// let mut builder = GraphBuilder::new();
    /// builder.add_vertex("A")?;
    /// builder.add_vertex("B")?;
    /// builder.add_edge_by_name("A", "B", 3)?;
    /// let graph = builder.build();
    /// let a = graph.vertex_id("A").expect("A exists");
    ///
    /// let mut sequence = 0;
    /// let tree = PartialTree::from_vertex(&graph, a, &mut sequence).expect("A is in the graph");
    /// assert_eq!(tree.display(&graph).to_string(), "Root: A  Arcs: {A B 3}");
    /// # Ok::<(), partree_core::GraphError>(())
    /// ```
    #[must_use]
    pub const fn display<'a>(&'a self, graph: &'a Graph) -> PartialTreeDisplay<'a> {
        PartialTreeDisplay { tree: self, graph }
    }
}

/// Renders a [`PartialTree`] with vertex names.
pub struct PartialTreeDisplay<'a> {
    tree: &'a PartialTree,
    graph: &'a Graph,
}

impl PartialTreeDisplay<'_> {
    fn write_vertex(&self, f: &mut fmt::Formatter<'_>, vertex: VertexId) -> fmt::Result {
        match self.graph.name(vertex) {
            Some(name) => f.write_str(name),
            None => write!(f, "{vertex}"),
        }
    }
}

impl fmt::Display for PartialTreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Root: ")?;
        self.write_vertex(f, self.tree.root)?;
        f.write_str("  Arcs: {")?;
        for (position, edge) in self.tree.arcs.to_sorted_vec().iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            self.write_vertex(f, edge.v1())?;
            f.write_str(" ")?;
            self.write_vertex(f, edge.v2())?;
            write!(f, " {}", edge.weight())?;
        }
        f.write_str("}")
    }
}
