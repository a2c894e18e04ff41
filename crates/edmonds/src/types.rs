//! Index types shared by every layer of the matching core.
//!
//! - `NodeId`: original vertex, dense in `[0, n)`.
//! - `Representative`: current canonical vertex of a partition block (a blossom or a
//!   single vertex). Only `Partition` hands these out.
//! - `ReprVec<T>`: flat table indexed by `Representative` only, so vertex-indexed and
//!   representative-indexed arrays cannot be mixed up.

use std::ops::{Index, IndexMut};

/// Original graph vertex.
pub type NodeId = usize;

/// Undirected edge given by its two endpoints.
pub type Edge = (NodeId, NodeId);

pub type EdgeList = Vec<Edge>;

/// Handle for the block (blossom) a vertex currently belongs to.
///
/// Two vertices are in the same blossom iff their representatives compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Representative(NodeId);

impl Representative {
    #[inline]
    pub(crate) fn new(id: NodeId) -> Self {
        Self(id)
    }

    /// Vertex id of the block member acting as representative.
    #[inline]
    pub fn id(self) -> NodeId {
        self.0
    }
}

/// Per-representative table over the vertex domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReprVec<T> {
    items: Vec<T>,
}

impl<T: Clone> ReprVec<T> {
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            items: vec![value; len],
        }
    }
}

impl<T> ReprVec<T> {
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            items: (0..len).map(f).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Index<Representative> for ReprVec<T> {
    type Output = T;
    #[inline]
    fn index(&self, r: Representative) -> &T {
        &self.items[r.0]
    }
}

impl<T> IndexMut<Representative> for ReprVec<T> {
    #[inline]
    fn index_mut(&mut self, r: Representative) -> &mut T {
        &mut self.items[r.0]
    }
}
