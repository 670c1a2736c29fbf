//! Undirected weighted graph consumed by the merge loop.
//!
//! Vertices are addressed by dense [`VertexId`]s in insertion order. Each
//! vertex carries its adjacency list; undirected edges are stored once per
//! endpoint. The graph is immutable after [`GraphBuilder::build`]; component
//! membership lives in [`crate::RootForest`], never in the graph itself.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::error::GraphError;

/// Dense vertex identifier assigned in insertion order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One adjacency entry: the far endpoint and the edge weight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Neighbor {
    vertex: VertexId,
    weight: u32,
}

impl Neighbor {
    /// Returns the far endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }
}

/// A named vertex with its adjacency list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    name: Arc<str>,
    neighbors: Vec<Neighbor>,
}

impl Vertex {
    /// Returns the vertex name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the adjacency list in insertion order.
    #[must_use]
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }
}

/// Immutable undirected weighted graph.
///
/// # Examples
/// ```
/// use partree_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex("A")?;
/// let b = builder.add_vertex("B")?;
/// builder.add_edge(a, b, 4)?;
/// let graph = builder.build();
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.name(b), Some("B"));
/// # Ok::<(), partree_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<Arc<str>, VertexId>,
}

impl Graph {
    /// Number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.vertices.len() }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Returns the vertex stored under `id`.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Returns the vertex name stored under `id`.
    #[must_use]
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(Vertex::name)
    }

    /// Looks up a vertex id by name.
    #[must_use]
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Iterates over `(id, vertex)` pairs in enumeration order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (VertexId(index), vertex))
    }

    /// Number of undirected edges, counting each self-loop once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let (loops, entries) = self
            .vertices()
            .flat_map(|(id, vertex)| vertex.neighbors.iter().map(move |n| n.vertex == id))
            .fold((0_usize, 0_usize), |(loops, entries), is_loop| {
                (loops + usize::from(is_loop), entries + 1)
            });
        (entries - loops) / 2 + loops
    }
}

/// Incrementally assembles a [`Graph`].
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its id.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when `name` is already present.
    pub fn add_vertex(&mut self, name: impl Into<Arc<str>>) -> Result<VertexId, GraphError> {
        let name = name.into();
        if self.graph.index.contains_key(&name) {
            return Err(GraphError::DuplicateVertex { name });
        }
        let id = VertexId(self.graph.vertices.len());
        self.graph.index.insert(Arc::clone(&name), id);
        self.graph.vertices.push(Vertex {
            name,
            neighbors: Vec::new(),
        });
        Ok(id)
    }

    /// Adds an undirected edge, inserting one adjacency entry per endpoint.
    ///
    /// A self-loop is recorded once.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is unknown.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: u32) -> Result<(), GraphError> {
        let vertex_count = self.graph.vertices.len();
        for vertex in [a, b] {
            if vertex.index() >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        self.graph.vertices[a.index()].neighbors.push(Neighbor { vertex: b, weight });
        if a != b {
            self.graph.vertices[b.index()].neighbors.push(Neighbor { vertex: a, weight });
        }
        Ok(())
    }

    /// Adds an undirected edge between two named vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either name is absent.
    pub fn add_edge_by_name(&mut self, a: &str, b: &str, weight: u32) -> Result<(), GraphError> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;
        self.add_edge(a, b, weight)
    }

    /// Number of vertices added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Returns `true` when no vertex has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> Graph {
        self.graph
    }

    fn resolve(&self, name: &str) -> Result<VertexId, GraphError> {
        self.graph
            .vertex_id(name)
            .ok_or_else(|| GraphError::UnknownVertex { name: name.into() })
    }
}
