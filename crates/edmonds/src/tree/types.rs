//! Tree-local state: node status, parent links, depth markers, and the reusable buffers.

use crate::types::{Edge, NodeId, ReprVec, Representative};

/// Status of a representative with respect to the current alternating tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
    Absent,
    Even,
    Odd,
    Root,
    /// Tombstone for a representative absorbed into a blossom. Never a valid read.
    Absorbed,
}

/// Edge attaching a tree node to its parent: `here` lies in the node's own block,
/// `there` in the parent's block. The parent representative is looked up through the
/// partition on every use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParentLink {
    pub here: NodeId,
    pub there: NodeId,
}

impl ParentLink {
    pub(crate) const NONE: ParentLink = ParentLink {
        here: NodeId::MAX,
        there: NodeId::MAX,
    };
}

/// Per-representative arrays for one tree, reused across roots without reallocation.
#[derive(Clone, Debug)]
pub struct TreeBuffers {
    pub(super) status: ReprVec<NodeStatus>,
    pub(super) parent: ReprVec<ParentLink>,
    pub(super) depth: ReprVec<usize>,
    pub(super) tree_vertices: Vec<NodeId>,
    /// Scratch for the two root paths of a fundamental circuit.
    pub(super) path_a: Vec<Representative>,
    pub(super) path_b: Vec<Representative>,
    /// Scratch for the cycle of a blossom (top first) and for an augmenting path.
    pub(super) cycle: Vec<Representative>,
    pub(super) path_edges: Vec<Edge>,
    /// Vertices that turned even during the latest blossom shrink.
    pub(super) newly_even: Vec<NodeId>,
}

impl TreeBuffers {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            status: ReprVec::filled(num_nodes, NodeStatus::Absent),
            parent: ReprVec::filled(num_nodes, ParentLink::NONE),
            depth: ReprVec::filled(num_nodes, 0),
            tree_vertices: Vec::new(),
            path_a: Vec::new(),
            path_b: Vec::new(),
            cycle: Vec::new(),
            path_edges: Vec::new(),
            newly_even: Vec::new(),
        }
    }

    /// Clear the previous tree and plant `root`.
    ///
    /// Only the entries touched by the previous tree are cleared.
    pub(crate) fn reset(&mut self, root: NodeId) {
        for &v in &self.tree_vertices {
            let r = Representative::new(v);
            self.status[r] = NodeStatus::Absent;
            self.parent[r] = ParentLink::NONE;
            self.depth[r] = 0;
        }
        self.tree_vertices.clear();
        let r = Representative::new(root);
        self.status[r] = NodeStatus::Root;
        self.depth[r] = 0;
        self.tree_vertices.push(root);
    }

    /// Every original vertex that joined the tree since the last reset.
    pub fn tree_vertices(&self) -> &[NodeId] {
        &self.tree_vertices
    }
}
