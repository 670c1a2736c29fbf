//! Error types for the partree core library.
//!
//! Defines the graph construction and merge-loop error enums exposed by the
//! public API, each paired with a stable machine-readable code.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while assembling a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex with the same name was already added.
    #[error("vertex `{name}` is already present in the graph")]
    DuplicateVertex {
        /// Name supplied twice.
        name: Arc<str>,
    },
    /// An edge referenced a vertex name that was never added.
    #[error("vertex `{name}` is not present in the graph")]
    UnknownVertex {
        /// Name that could not be resolved.
        name: Arc<str>,
    },
    /// An edge referenced a vertex id outside the graph.
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange {
        /// Offending vertex id.
        vertex: VertexId,
        /// Number of vertices currently in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex with the same name was already added.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// An edge referenced a vertex name that was never added.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// An edge referenced a vertex id outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
    }
}

/// Errors returned by the partial tree collection and the merge loop.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The front of an empty collection was requested.
    #[error("cannot remove a partial tree from an empty collection")]
    EmptyCollection,
    /// No partial tree in the collection contains the vertex.
    #[error("no partial tree contains vertex {vertex}; root linkage is inconsistent")]
    NotFound {
        /// Vertex whose owning tree could not be located.
        vertex: VertexId,
    },
    /// A candidate heap ran out of edges.
    #[error("candidate heap is empty")]
    EmptyHeap,
    /// A partial tree ran out of candidate edges before the graph was spanned.
    #[error(
        "graph is disconnected: the tree rooted at {vertex} has no edge leaving it \
         ({components} components remain)"
    )]
    DisconnectedGraph {
        /// Designated root of the tree that could not be extended.
        vertex: VertexId,
        /// Number of partial trees left when the loop stopped.
        components: usize,
    },
    /// A collection iterator was advanced past its final tree.
    #[error("partial tree iterator advanced past the end of the collection")]
    IterationExhausted,
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The front of an empty collection was requested.
        EmptyCollection => EmptyCollection => "MST_EMPTY_COLLECTION",
        /// No partial tree in the collection contains the vertex.
        NotFound => NotFound { .. } => "MST_NOT_FOUND",
        /// A candidate heap ran out of edges.
        EmptyHeap => EmptyHeap => "MST_EMPTY_HEAP",
        /// A partial tree ran out of candidate edges before the graph was spanned.
        DisconnectedGraph => DisconnectedGraph { .. } => "MST_DISCONNECTED_GRAPH",
        /// A collection iterator was advanced past its final tree.
        IterationExhausted => IterationExhausted => "MST_ITERATION_EXHAUSTED",
    }
}

impl MstError {
    /// Returns `true` when the error reflects invalid input rather than a
    /// broken internal invariant.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::DisconnectedGraph { .. })
    }
}

/// Convenient alias for results returned by the merge loop.
pub type Result<T> = core::result::Result<T, MstError>;
