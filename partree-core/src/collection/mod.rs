//! Ring of partial trees awaiting a merge.
//!
//! Trees live in an arena of slots addressed by stable indices. Occupied
//! slots form a singly-linked ring anchored at `rear`; `rear.next` is the
//! logical front. Removing from the front and appending at the rear are
//! O(1), removing the tree that contains a vertex is a linear scan. Vacated
//! slots are recycled through a free list.
//!
//! The collection also owns the [`RootForest`] because locating the tree
//! that contains a vertex requires resolving canonical roots.

use tracing::{debug, instrument};

use crate::{
    error::{MstError, Result},
    graph::{Graph, VertexId},
    linkage::{Linkage, RootForest},
    partial_tree::PartialTree,
};

#[derive(Clone, Debug)]
struct Slot {
    tree: Option<PartialTree>,
    next: usize,
}

/// Circular collection of [`PartialTree`]s.
#[derive(Clone, Debug)]
pub struct PartialTreeList {
    slots: Vec<Slot>,
    free: Vec<usize>,
    rear: Option<usize>,
    len: usize,
    roots: RootForest,
}

impl PartialTreeList {
    /// Creates an empty collection whose root linkage covers `vertex_count`
    /// vertices.
    #[must_use]
    pub fn new(vertex_count: usize, linkage: Linkage) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            rear: None,
            len: 0,
            roots: RootForest::new(vertex_count, linkage),
        }
    }

    /// Builds one singleton tree per vertex of `graph`, appended in vertex
    /// enumeration order.
    ///
    /// Candidate edges receive sequence numbers in the same order, which
    /// fixes the tie-break between equal weights.
    ///
    /// # Examples
    /// ```
    /// use partree_core::{GraphBuilder, Linkage, PartialTreeList};
    ///
    /// let mut builder = GraphBuilder::new();
    /// builder.add_vertex("A")?;
    /// builder.add_vertex("B")?;
    /// builder.add_edge_by_name("A", "B", 1)?;
    /// let graph = builder.build();
    ///
    /// let list = PartialTreeList::initialize(&graph, Linkage::default());
    /// assert_eq!(list.len(), 2);
    /// # Ok::<(), partree_core::GraphError>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "partree.initialize",
        skip(graph),
        fields(vertices = graph.len(), linkage = linkage.as_str()),
    )]
    pub fn initialize(graph: &Graph, linkage: Linkage) -> Self {
        let mut list = Self::new(graph.len(), linkage);
        list.slots.reserve(graph.len());
        let mut sequence = 0_u64;
        for (id, _) in graph.vertices() {
            if let Some(tree) = PartialTree::from_vertex(graph, id, &mut sequence) {
                list.append(tree);
            }
        }
        debug!(trees = list.len(), candidate_edges = sequence, "partial trees initialised");
        list
    }

    /// Number of trees in the collection.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.len }

    /// Returns `true` when the collection holds no trees.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Root linkage shared by the trees of this collection.
    #[must_use]
    #[rustfmt::skip]
    pub const fn roots(&self) -> &RootForest { &self.roots }

    /// Mutable root linkage, used when merging trees.
    #[rustfmt::skip]
    pub fn roots_mut(&mut self) -> &mut RootForest { &mut self.roots }

    /// Appends `tree` at the rear; it becomes the new rear.
    pub fn append(&mut self, tree: PartialTree) {
        let index = self.allocate(tree);
        match self.rear {
            None => self.slots[index].next = index,
            Some(rear) => {
                self.slots[index].next = self.slots[rear].next;
                self.slots[rear].next = index;
            }
        }
        self.rear = Some(index);
        self.len += 1;
    }

    /// Removes and returns the tree at the front.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyCollection`] when the collection is empty.
    pub fn remove_front(&mut self) -> Result<PartialTree> {
        let rear = self.rear.ok_or(MstError::EmptyCollection)?;
        let front = self.slots[rear].next;
        self.unlink(rear, front).ok_or(MstError::EmptyCollection)
    }

    /// Removes and returns the first tree, scanning from the front, whose
    /// root shares a canonical root with `vertex`.
    ///
    /// # Errors
    /// Returns [`MstError::NotFound`] when a full pass finds no such tree.
    pub fn remove_containing(&mut self, vertex: VertexId) -> Result<PartialTree> {
        let not_found = MstError::NotFound { vertex };
        let rear = self.rear.ok_or_else(|| not_found.clone())?;
        let target = self.roots.find(vertex);

        let mut previous = rear;
        let mut current = self.slots[rear].next;
        for _ in 0..self.len {
            let tree_root = self.slots[current]
                .tree
                .as_ref()
                .map(PartialTree::root)
                .ok_or_else(|| not_found.clone())?;
            if self.roots.find(tree_root) == target {
                return self.unlink(previous, current).ok_or(not_found);
            }
            previous = current;
            current = self.slots[current].next;
        }
        Err(not_found)
    }

    /// Iterates over the trees from front to rear without mutation.
    #[must_use]
    pub fn iter(&self) -> PartialTreeIter<'_> {
        PartialTreeIter {
            list: self,
            cursor: self.rear.map(|rear| self.slots[rear].next),
            remaining: self.len,
        }
    }

    /// Consumes the collection, returning its trees front to rear and the
    /// root linkage.
    #[must_use]
    pub fn into_parts(mut self) -> (Vec<PartialTree>, RootForest) {
        let mut trees = Vec::with_capacity(self.len);
        while let Ok(tree) = self.remove_front() {
            trees.push(tree);
        }
        (trees, self.roots)
    }

    fn allocate(&mut self, tree: PartialTree) -> usize {
        if let Some(index) = self.free.pop() {
            self.slots[index] = Slot {
                tree: Some(tree),
                next: index,
            };
            return index;
        }
        let index = self.slots.len();
        self.slots.push(Slot {
            tree: Some(tree),
            next: index,
        });
        index
    }

    /// Detaches `current`, whose predecessor in the ring is `previous`.
    fn unlink(&mut self, previous: usize, current: usize) -> Option<PartialTree> {
        let tree = self.slots[current].tree.take()?;
        if previous == current {
            self.rear = None;
        } else {
            self.slots[previous].next = self.slots[current].next;
            if self.rear == Some(current) {
                self.rear = Some(previous);
            }
        }
        self.slots[current].next = current;
        self.free.push(current);
        self.len -= 1;
        Some(tree)
    }
}

/// Front-to-rear iterator over a [`PartialTreeList`] that stops after
/// exactly `len()` trees.
#[derive(Clone, Debug)]
pub struct PartialTreeIter<'a> {
    list: &'a PartialTreeList,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> PartialTreeIter<'a> {
    /// Advances the iterator.
    ///
    /// # Errors
    /// Returns [`MstError::IterationExhausted`] once every tree has been
    /// yielded.
    pub fn try_next(&mut self) -> Result<&'a PartialTree> {
        if self.remaining == 0 {
            return Err(MstError::IterationExhausted);
        }
        let index = self.cursor.ok_or(MstError::IterationExhausted)?;
        let slot = self
            .list
            .slots
            .get(index)
            .ok_or(MstError::IterationExhausted)?;
        let tree = slot.tree.as_ref().ok_or(MstError::IterationExhausted)?;
        self.cursor = Some(slot.next);
        self.remaining -= 1;
        Ok(tree)
    }
}

impl<'a> Iterator for PartialTreeIter<'a> {
    type Item = &'a PartialTree;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PartialTreeIter<'_> {}

impl<'a> IntoIterator for &'a PartialTreeList {
    type Item = &'a PartialTree;
    type IntoIter = PartialTreeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(kani)]
mod kani_proofs {
    //! Kani proof harnesses for the ring invariants of [`PartialTreeList`].

    use super::{Linkage, PartialTree, PartialTreeList};
    use crate::graph::VertexId;

    /// Verifies that any interleaving of appends and front removals keeps
    /// `rear` present exactly when the collection is non-empty and preserves
    /// FIFO order.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_ring_fifo_and_rear_invariant() {
        let mut list = PartialTreeList::new(4, Linkage::Compressed);
        let mut next_root = 0_usize;
        let mut expected_front = 0_usize;
        for _ in 0..4 {
            if kani::any::<bool>() && next_root < 4 {
                list.append(PartialTree::new(VertexId::new(next_root)));
                next_root += 1;
            } else if let Ok(tree) = list.remove_front() {
                kani::assert(tree.root().index() == expected_front, "ring must be FIFO");
                expected_front += 1;
            }
            kani::assert(
                list.rear.is_some() == (list.len() > 0),
                "rear must be present exactly when non-empty",
            );
            kani::assert(list.len() == next_root - expected_front, "len must track");
        }
    }
}
