//! Partree core library.
//!
//! Computes minimum spanning trees of connected, undirected, weighted graphs
//! by merging partial trees. Each component carries its own min-heap of
//! candidate edges; components are fused pairwise until one remains.
//!
//! # Tie-breaking
//!
//! Candidate edges of equal weight are extracted in insertion order. Edges are
//! numbered while the initial collection is built, vertex by vertex in graph
//! enumeration order and, within a vertex, in adjacency order. Runs over the
//! same graph therefore accept the same edges.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the merge loop emits:
//!
//! - `partree_merges_total` (counter)
//! - `partree_stale_edges_total` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod collection;
mod edge;
mod error;
mod graph;
mod heap;
mod linkage;
mod mst;
mod partial_tree;
mod result;
mod solver;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::MstBuilder,
    collection::{PartialTreeIter, PartialTreeList},
    edge::Edge,
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode, Result},
    graph::{Graph, GraphBuilder, Neighbor, Vertex, VertexId},
    heap::CandidateHeap,
    linkage::{Linkage, RootForest},
    mst::execute,
    partial_tree::{PartialTree, PartialTreeDisplay},
    result::SpanningTree,
    solver::PartialTreeMst,
};
