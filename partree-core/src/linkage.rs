//! Root linkage tracking which partial tree each vertex belongs to.
//!
//! Every vertex starts as its own root. Absorbing one partial tree into
//! another links the absorbed tree's root beneath the survivor's, so a lookup
//! from any vertex reaches the canonical representative of its component
//! without relabelling the absorbed vertices.

use crate::graph::VertexId;

/// Strategy used to link and resolve roots.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Linkage {
    /// Union by rank with path compression. Lookups are amortised near
    /// constant time.
    #[default]
    Compressed,
    /// The absorbed root always points at the survivor's root and lookups walk
    /// the chain without compressing it. Lookup cost grows with merge depth.
    Chained,
}

impl Linkage {
    /// Returns the symbolic name used in logs and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compressed => "compressed",
            Self::Chained => "chained",
        }
    }
}

/// Index-based union-find over graph vertices.
#[derive(Clone, Debug)]
pub struct RootForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
    linkage: Linkage,
}

impl RootForest {
    /// Creates a forest of `vertex_count` singleton components.
    #[must_use]
    pub fn new(vertex_count: usize, linkage: Linkage) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            rank: vec![0; vertex_count],
            components: vertex_count,
            linkage,
        }
    }

    /// Number of vertices tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when no vertex is tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Linkage strategy in use.
    #[must_use]
    #[rustfmt::skip]
    pub const fn linkage(&self) -> Linkage { self.linkage }

    /// Resolves the canonical root of `vertex`.
    ///
    /// Vertices outside the forest resolve to themselves.
    pub fn find(&mut self, vertex: VertexId) -> VertexId {
        let mut node = vertex.index();
        if node >= self.parent.len() {
            return vertex;
        }

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        if self.linkage == Linkage::Compressed {
            while self.parent[node] != node {
                let parent = self.parent[node];
                self.parent[node] = root;
                node = parent;
            }
        }

        VertexId::new(root)
    }

    /// Returns `true` when `a` and `b` share a canonical root.
    pub fn same(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Joins the components of `survivor` and `absorbed`.
    ///
    /// Returns `false` when they were already joined. Under
    /// [`Linkage::Chained`] the absorbed root is always placed beneath the
    /// survivor's root; under [`Linkage::Compressed`] the higher-rank root
    /// wins and ties keep the survivor's root.
    pub fn link(&mut self, survivor: VertexId, absorbed: VertexId) -> bool {
        let survivor_root = self.find(survivor).index();
        let absorbed_root = self.find(absorbed).index();
        if survivor_root == absorbed_root
            || survivor_root >= self.parent.len()
            || absorbed_root >= self.parent.len()
        {
            return false;
        }

        let (parent, child) = match self.linkage {
            Linkage::Chained => (survivor_root, absorbed_root),
            Linkage::Compressed => {
                choose_parent_child(survivor_root, absorbed_root, &self.rank)
            }
        };
        self.parent[child] = parent;
        if self.linkage == Linkage::Compressed && self.rank[parent] == self.rank[child] {
            self.rank[parent] = self.rank[parent].saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        true
    }

    /// Length of the parent chain from `vertex` to its root.
    #[must_use]
    pub fn depth(&self, vertex: VertexId) -> usize {
        let mut node = vertex.index();
        let mut depth = 0;
        while let Some(&parent) = self.parent.get(node) {
            if parent == node {
                break;
            }
            node = parent;
            depth += 1;
        }
        depth
    }
}

fn choose_parent_child(survivor: usize, absorbed: usize, rank: &[u8]) -> (usize, usize) {
    if rank[absorbed] > rank[survivor] {
        (absorbed, survivor)
    } else {
        (survivor, absorbed)
    }
}
