//! Fundamental circuit of an even–even edge: common-ancestor walk and cycle assembly.

use super::AlternatingTree;
use crate::types::{EdgeList, NodeId, Representative};

impl AlternatingTree<'_> {
    /// Fill `path_a`/`path_b` with the root paths of `a` and `b` up to and including their
    /// lowest common ancestor.
    ///
    /// Steps the side with the larger depth marker; on equal markers the sides alternate.
    /// Cost is the length of both paths below the ancestor.
    pub(super) fn walk_to_common_ancestor(&mut self, a: Representative, b: Representative) {
        self.buf.path_a.clear();
        self.buf.path_b.clear();
        self.buf.path_a.push(a);
        self.buf.path_b.push(b);
        let (mut a, mut b) = (a, b);
        let mut a_first = true;
        while a != b {
            let (da, db) = (self.buf.depth[a], self.buf.depth[b]);
            let step_a = if da == db {
                a_first = !a_first;
                !a_first
            } else {
                da > db
            };
            if step_a {
                a = self.parent_of(a);
                self.buf.path_a.push(a);
            } else {
                b = self.parent_of(b);
                self.buf.path_b.push(b);
            }
        }
    }

    /// Build the cycle (top first) into `buf.cycle` and return its edges, where edge `i`
    /// joins `cycle[i]` and `cycle[i + 1]` (wrapping around).
    ///
    /// Order: top, down the `a` path, across `vertex_a`–`vertex_b`, up the `b` path.
    pub(super) fn collect_cycle(&mut self, vertex_a: NodeId, vertex_b: NodeId) -> EdgeList {
        let p = self.buf.path_a.len() - 1;
        let q = self.buf.path_b.len() - 1;
        debug_assert_eq!(self.buf.path_a[p], self.buf.path_b[q]);
        let k = p + q + 1;
        debug_assert!(k % 2 == 1, "even and even meet in an odd cycle");

        self.buf.cycle.clear();
        let mut edges = Vec::with_capacity(k);
        for i in (0..=p).rev() {
            let node = self.buf.path_a[i];
            self.buf.cycle.push(node);
            if i > 0 {
                let child_link = self.buf.parent[self.buf.path_a[i - 1]];
                edges.push((child_link.there, child_link.here));
            }
        }
        edges.push((vertex_a, vertex_b));
        for j in 0..q {
            let node = self.buf.path_b[j];
            self.buf.cycle.push(node);
            let link = self.buf.parent[node];
            edges.push((link.here, link.there));
        }
        debug_assert_eq!(self.buf.cycle.len(), k);
        debug_assert_eq!(edges.len(), k);
        edges
    }
}
