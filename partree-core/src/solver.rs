//! Entry point tying initialisation and the merge loop together.

use tracing::{info, instrument};

use crate::{
    collection::PartialTreeList, error::Result, graph::Graph, linkage::Linkage, mst::execute,
    result::SpanningTree,
};

/// Computes minimum spanning trees with the partial tree merge algorithm.
///
/// # Examples
/// ```
/// use partree_core::{GraphBuilder, MstBuilder};
///
/// let mut builder = GraphBuilder::new();
/// for name in ["A", "B", "C", "D"] {
///     builder.add_vertex(name)?;
/// }
/// for (a, b, w) in [("A", "B", 1), ("B", "C", 2), ("C", "D", 3), ("A", "D", 10), ("A", "C", 5)] {
///     builder.add_edge_by_name(a, b, w)?;
/// }
/// let graph = builder.build();
///
/// let tree = MstBuilder::new().build().run(&graph)?;
/// assert_eq!(tree.total_weight(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialTreeMst {
    linkage: Linkage,
}

impl PartialTreeMst {
    pub(crate) const fn new(linkage: Linkage) -> Self {
        Self { linkage }
    }

    /// Returns the root linkage strategy used by [`Self::run`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn linkage(&self) -> Linkage { self.linkage }

    /// Builds the initial collection for `graph`.
    #[must_use]
    pub fn initialize(&self, graph: &Graph) -> PartialTreeList {
        PartialTreeList::initialize(graph, self.linkage)
    }

    /// Computes the minimum spanning tree of `graph`.
    ///
    /// A graph without vertices yields an empty tree.
    ///
    /// # Errors
    /// Returns [`crate::MstError::DisconnectedGraph`] when `graph` is not
    /// connected.
    #[instrument(
        name = "partree.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.len(),
            edges = graph.edge_count(),
            linkage = self.linkage.as_str(),
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<SpanningTree> {
        finish(self.initialize(graph))
    }

    /// Runs the merge loop over a collection built by [`Self::initialize`].
    ///
    /// Lets callers inspect the initial trees before merging without
    /// building the collection twice. The collection keeps the linkage it
    /// was initialised with.
    ///
    /// # Errors
    /// Returns [`crate::MstError::DisconnectedGraph`] when the trees cannot
    /// be merged into one.
    #[instrument(
        name = "partree.run_initialized",
        err,
        skip(self, list),
        fields(trees = list.len(), linkage = list.roots().linkage().as_str()),
    )]
    pub fn run_initialized(&self, list: PartialTreeList) -> Result<SpanningTree> {
        finish(list)
    }
}

fn finish(list: PartialTreeList) -> Result<SpanningTree> {
    let tree = execute(list)?;
    info!(
        edges = tree.len(),
        total_weight = tree.total_weight(),
        "minimum spanning tree computed"
    );
    Ok(tree)
}
