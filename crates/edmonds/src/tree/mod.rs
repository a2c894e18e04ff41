//! Alternating tree rooted at one exposed vertex.
//!
//! Purpose
//! - Grow an alternating tree over the current matching, contract blossoms when two even
//!   nodes meet, and augment (then undo every contraction) once an exposed vertex is hit.
//!
//! Model
//! - `AlternatingTree` borrows the shared `Matching` and `Partition` plus a `TreeBuffers`
//!   value for one root. The buffers are reset, not reallocated, for the next root.
//! - Nodes are representatives; statuses, parent links and depth markers live in flat
//!   arrays indexed by representative (`types.rs`).
//! - Depth markers strictly increase along every root path, so the lowest common ancestor
//!   of two nodes is found by stepping the deeper side (`circuit.rs`).
//! - `augment_and_unshrink` and `unshrink` consume the tree: once the contractions are
//!   undone only `TreeBuffers::tree_vertices` remains meaningful.
//!
//! Code cross-refs: `Partition::{shrink,expand}`, `Matching::{shrink,expand,augment_along}`,
//! `search::PerfectMatchingSearch` (the only driver).

mod circuit;
mod types;

pub use types::{NodeStatus, ParentLink, TreeBuffers};

use crate::matching::Matching;
use crate::partition::Partition;
use crate::types::{NodeId, Representative};

pub struct AlternatingTree<'a> {
    matching: &'a mut Matching,
    partition: &'a mut Partition,
    buf: &'a mut TreeBuffers,
}

impl<'a> AlternatingTree<'a> {
    /// Plant a new tree at the exposed vertex `root`.
    ///
    /// No blossom may be shrunk: the previous tree must have been unshrunk.
    pub fn new(
        root: NodeId,
        matching: &'a mut Matching,
        partition: &'a mut Partition,
        buf: &'a mut TreeBuffers,
    ) -> Self {
        debug_assert!(!partition.is_shrunk() && !matching.is_shrunk());
        debug_assert!(!matching.is_matched(partition.representative_of(root)));
        buf.reset(root);
        Self {
            matching,
            partition,
            buf,
        }
    }

    #[inline]
    pub fn representative_of(&self, node: NodeId) -> Representative {
        self.partition.representative_of(node)
    }

    #[inline]
    pub fn matching(&self) -> &Matching {
        &*self.matching
    }

    pub fn tree_vertices(&self) -> &[NodeId] {
        self.buf.tree_vertices()
    }

    #[inline]
    pub fn is_tree_node(&self, r: Representative) -> bool {
        self.status(r) != NodeStatus::Absent
    }

    /// Root or even node.
    #[inline]
    pub fn is_even(&self, r: Representative) -> bool {
        let s = self.status(r);
        debug_assert!(s != NodeStatus::Absent, "parity of a node outside the tree");
        matches!(s, NodeStatus::Even | NodeStatus::Root)
    }

    #[inline]
    fn status(&self, r: Representative) -> NodeStatus {
        debug_assert_eq!(self.partition.representative_of(r.id()), r);
        let s = self.buf.status[r];
        debug_assert!(
            s != NodeStatus::Absorbed,
            "status read on an absorbed representative"
        );
        s
    }

    #[inline]
    fn parent_of(&self, r: Representative) -> Representative {
        self.partition.representative_of(self.buf.parent[r].there)
    }

    fn attach(&mut self, node: Representative, link: ParentLink, status: NodeStatus, depth: usize) {
        debug_assert!(!self.is_tree_node(node));
        debug_assert!(self.partition.is_unshrunk(node));
        self.buf.parent[node] = link;
        self.buf.status[node] = status;
        self.buf.depth[node] = depth;
        self.buf.tree_vertices.push(node.id());
    }

    /// Grow through the matched edge at `matched_repr`.
    ///
    /// `matched_repr` (reached from `tree_vertex` in the even node `tree_repr`) becomes an
    /// odd child, its mate an even grandchild. Nodes outside the tree are never blossoms,
    /// so both new nodes are single vertices.
    pub fn extend(
        &mut self,
        tree_repr: Representative,
        tree_vertex: NodeId,
        matched_repr: Representative,
    ) {
        debug_assert!(self.is_even(tree_repr));
        debug_assert_eq!(self.representative_of(tree_vertex), tree_repr);
        debug_assert!(self.matching.is_matched(matched_repr));
        let odd = matched_repr;
        let even = self.matching.other_end(odd);
        let depth = self.buf.depth[tree_repr];
        self.attach(
            odd,
            ParentLink {
                here: odd.id(),
                there: tree_vertex,
            },
            NodeStatus::Odd,
            depth + 1,
        );
        self.attach(
            even,
            ParentLink {
                here: even.id(),
                there: odd.id(),
            },
            NodeStatus::Even,
            depth + 2,
        );
    }

    /// Contract the odd cycle closed by the edge `vertex_a`–`vertex_b` between the even
    /// nodes `repr_a` and `repr_b`.
    ///
    /// Returns the vertices that were odd before the contraction; they are even now and
    /// their incident edges still need to be explored.
    pub fn shrink_fundamental_circuit(
        &mut self,
        repr_a: Representative,
        repr_b: Representative,
        vertex_a: NodeId,
        vertex_b: NodeId,
    ) -> &[NodeId] {
        debug_assert!(repr_a != repr_b);
        debug_assert!(self.is_even(repr_a) && self.is_even(repr_b));
        debug_assert_eq!(self.representative_of(vertex_a), repr_a);
        debug_assert_eq!(self.representative_of(vertex_b), repr_b);

        self.walk_to_common_ancestor(repr_a, repr_b);
        let edges = self.collect_cycle(vertex_a, vertex_b);

        self.buf.newly_even.clear();
        for i in 0..self.buf.cycle.len() {
            let member = self.buf.cycle[i];
            if self.status(member) == NodeStatus::Odd {
                self.buf.newly_even.push(member.id());
            }
        }

        let top = self.buf.cycle[0];
        let top_status = self.status(top);
        debug_assert!(matches!(top_status, NodeStatus::Even | NodeStatus::Root));
        let top_link = self.buf.parent[top];
        let top_depth = self.buf.depth[top];

        let survivor = self.partition.shrink(&self.buf.cycle);
        self.matching.shrink(&self.buf.cycle, edges, survivor);
        for &member in &self.buf.cycle {
            self.buf.status[member] = NodeStatus::Absorbed;
        }
        self.buf.status[survivor] = top_status;
        self.buf.parent[survivor] = top_link;
        self.buf.depth[survivor] = top_depth;

        tracing::trace!(
            len = self.buf.cycle.len(),
            top = top.id(),
            survivor = survivor.id(),
            "blossom shrunk"
        );
        &self.buf.newly_even
    }

    /// Augment along the tree path from `tree_repr` to the root, extended by the edge
    /// `tree_vertex`–`exposed_repr`, then undo every contraction of this tree.
    pub fn augment_and_unshrink(
        self,
        tree_repr: Representative,
        tree_vertex: NodeId,
        exposed_repr: Representative,
    ) {
        debug_assert!(self.is_even(tree_repr));
        debug_assert!(!self.is_tree_node(exposed_repr));
        debug_assert!(!self.matching.is_matched(exposed_repr));

        self.buf.cycle.clear();
        self.buf.path_edges.clear();
        self.buf.cycle.push(exposed_repr);
        self.buf.cycle.push(tree_repr);
        self.buf.path_edges.push((exposed_repr.id(), tree_vertex));
        let mut current = tree_repr;
        while self.status(current) != NodeStatus::Root {
            let link = self.buf.parent[current];
            self.buf.path_edges.push((link.here, link.there));
            current = self.parent_of(current);
            self.buf.cycle.push(current);
        }
        let (path, edges) = (&self.buf.cycle, &self.buf.path_edges);
        self.matching.augment_along(path, edges);
        tracing::trace!(len = self.buf.cycle.len(), "augmented");
        self.unshrink();
    }

    /// Expand every blossom shrunk during this tree's lifetime, newest first.
    pub fn unshrink(self) {
        while self.partition.is_shrunk() {
            let (members, name) = self.partition.expand();
            self.matching.expand(name, &members, &*self.partition);
        }
        debug_assert!(!self.matching.is_shrunk());
    }
}

#[cfg(test)]
mod tests;
