//! Per-tree binary min-heap of candidate edges.
//!
//! The heap never purges edges whose endpoints have since been unified; the
//! merge loop discards them when they surface. `len()` therefore counts stale
//! entries too, and always equals `inserted() - extracted()`.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    edge::Edge,
    error::{MstError, Result},
};

/// Binary min-heap of [`Edge`]s keyed by `(weight, sequence)`.
#[derive(Clone, Debug, Default)]
pub struct CandidateHeap {
    entries: BinaryHeap<Reverse<Edge>>,
    inserted: u64,
    extracted: u64,
}

impl CandidateHeap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `edge`.
    pub fn insert(&mut self, edge: Edge) {
        self.entries.push(Reverse(edge));
        self.inserted = self.inserted.saturating_add(1);
    }

    /// Removes and returns the lightest edge.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyHeap`] when no edge remains.
    pub fn delete_min(&mut self) -> Result<Edge> {
        let Reverse(edge) = self.entries.pop().ok_or(MstError::EmptyHeap)?;
        self.extracted = self.extracted.saturating_add(1);
        Ok(edge)
    }

    /// Returns the lightest edge without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&Edge> {
        self.entries.peek().map(|Reverse(edge)| edge)
    }

    /// Moves every edge of `other` into `self`.
    ///
    /// The smaller heap is drained into the larger one; lifetime counters
    /// are summed so `len() == inserted() - extracted()` keeps holding.
    pub fn absorb(&mut self, mut other: Self) {
        if other.entries.len() > self.entries.len() {
            std::mem::swap(&mut self.entries, &mut other.entries);
        }
        self.entries.append(&mut other.entries);
        self.inserted = self.inserted.saturating_add(other.inserted);
        self.extracted = self.extracted.saturating_add(other.extracted);
    }

    /// Number of edges currently held, stale ones included.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` when the heap holds no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Total edges ever inserted, including those received via [`Self::absorb`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn inserted(&self) -> u64 { self.inserted }

    /// Total edges ever removed through [`Self::delete_min`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn extracted(&self) -> u64 { self.extracted }

    /// Iterates over the held edges in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.entries.iter().map(|Reverse(edge)| edge)
    }

    /// Returns the held edges sorted lightest first.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.iter().copied().collect();
        edges.sort_unstable();
        edges
    }
}

impl Extend<Edge> for CandidateHeap {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for edge in iter {
            self.insert(edge);
        }
    }
}
