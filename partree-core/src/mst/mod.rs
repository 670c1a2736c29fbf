//! Component-merging minimum spanning tree construction.
//!
//! Every vertex starts as its own [`PartialTree`]. The loop repeatedly takes
//! the tree at the front of the collection, extracts its lightest candidate
//! edge that leaves the tree, removes the tree on the far side, merges the
//! two and appends the result at the rear. By the cut property each accepted
//! edge belongs to a minimum spanning tree. The loop ends when a single tree
//! remains.

use tracing::{debug, instrument, trace, warn};

use crate::{
    collection::PartialTreeList,
    edge::Edge,
    error::{MstError, Result},
    graph::VertexId,
    linkage::RootForest,
    partial_tree::PartialTree,
    result::SpanningTree,
};

/// Runs the merge loop over an initialised collection.
///
/// # Errors
/// Returns [`MstError::DisconnectedGraph`] when a tree exhausts its
/// candidate edges before every vertex has been joined. [`MstError::NotFound`]
/// and [`MstError::EmptyCollection`] signal a broken internal invariant.
///
/// # Examples
/// ```
/// use partree_core::{GraphBuilder, Linkage, PartialTreeList, execute};
///
/// let mut builder = GraphBuilder::new();
/// for name in ["A", "B", "C"] {
///     builder.add_vertex(name)?;
/// }
/// builder.add_edge_by_name("A", "B", 4)?;
/// builder.add_edge_by_name("B", "C", 1)?;
/// builder.add_edge_by_name("A", "C", 2)?;
/// let graph = builder.build();
///
/// let tree = execute(PartialTreeList::initialize(&graph, Linkage::default()))?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.total_weight(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "partree.execute",
    err,
    skip(list),
    fields(trees = list.len(), linkage = list.roots().linkage().as_str()),
)]
pub fn execute(mut list: PartialTreeList) -> Result<SpanningTree> {
    let mut accepted = Vec::with_capacity(list.len().saturating_sub(1));

    while list.len() > 1 {
        let mut first = list.remove_front()?;
        let edge = match lightest_crossing_edge(&mut first, list.roots_mut()) {
            Ok(edge) => edge,
            Err(MstError::EmptyHeap) => {
                let components = list.len().saturating_add(1);
                warn!(
                    root = %first.root(),
                    components,
                    "partial tree has no edge leaving it"
                );
                return Err(MstError::DisconnectedGraph {
                    vertex: first.root(),
                    components,
                });
            }
            Err(other) => return Err(other),
        };

        let far = far_endpoint(&edge, &first, list.roots_mut());
        let second = list.remove_containing(far)?;
        debug!(
            v1 = %edge.v1(),
            v2 = %edge.v2(),
            weight = edge.weight(),
            survivor = %first.root(),
            absorbed = %second.root(),
            "accepted edge"
        );
        first.merge(second, list.roots_mut());
        list.append(first);
        accepted.push(edge);

        #[cfg(feature = "metrics")]
        metrics::counter!("partree_merges_total").increment(1);
    }

    let tree = SpanningTree::from_edges(accepted);
    debug!(
        edges = tree.len(),
        total_weight = tree.total_weight(),
        "spanning tree complete"
    );
    Ok(tree)
}

/// Pops candidates from `tree` until one joins two different components.
fn lightest_crossing_edge(tree: &mut PartialTree, roots: &mut RootForest) -> Result<Edge> {
    loop {
        let edge = tree.arcs_mut().delete_min()?;
        if !roots.same(edge.v1(), edge.v2()) {
            return Ok(edge);
        }
        trace!(
            v1 = %edge.v1(),
            v2 = %edge.v2(),
            weight = edge.weight(),
            "discarded stale edge"
        );

        #[cfg(feature = "metrics")]
        metrics::counter!("partree_stale_edges_total").increment(1);
    }
}

/// Returns the endpoint of `edge` that lies outside `tree`.
fn far_endpoint(edge: &Edge, tree: &PartialTree, roots: &mut RootForest) -> VertexId {
    if roots.same(edge.v1(), tree.root()) {
        edge.v2()
    } else {
        edge.v1()
    }
}
