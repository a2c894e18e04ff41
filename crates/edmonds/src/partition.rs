//! Partition of the vertex set into blossoms, with LIFO undo.
//!
//! Purpose
//! - Map every original vertex to the representative of the block (blossom) that
//!   currently contains it, merge several blocks into one (`shrink`) and undo the
//!   most recent merge (`expand`).
//!
//! Model
//! - `labels[v]` is the representative of `v`; lookups are a single array read.
//! - `elements[r]` lists the vertices of the block named `r` (empty for non-representatives).
//! - A merge keeps the name of the largest block and relabels the others, so each vertex
//!   is relabelled O(log n) times over any sequence of merges.
//! - Each merge pushes a frame with the members in supplied order and how many vertices
//!   every absorbed block contributed; those vertices sit at the tail of the surviving
//!   block's list, so `expand` splits them off again in reverse order.
//!
//! Invariants
//! - Blocks partition `0..n`; every representative is a member of its own block.
//! - `shrink` followed by `expand` restores labels and block contents exactly.

use crate::types::{NodeId, Representative};

#[derive(Clone, Debug)]
struct ShrinkFrame {
    members: Vec<Representative>,
    survivor: Representative,
    /// Vertex count moved into `survivor` per absorbed member, in merge order.
    absorbed: Vec<(Representative, usize)>,
}

/// Disjoint vertex blocks with reversible merges.
#[derive(Clone, Debug)]
pub struct Partition {
    labels: Vec<Representative>,
    elements: Vec<Vec<NodeId>>,
    frames: Vec<ShrinkFrame>,
}

impl Partition {
    /// Every vertex in its own block.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            labels: (0..num_nodes).map(Representative::new).collect(),
            elements: (0..num_nodes).map(|v| vec![v]).collect(),
            frames: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn representative_of(&self, node: NodeId) -> Representative {
        self.labels[node]
    }

    /// Vertices of the block named `r`.
    #[inline]
    pub fn block(&self, r: Representative) -> &[NodeId] {
        &self.elements[r.id()]
    }

    #[inline]
    pub fn is_unshrunk(&self, r: Representative) -> bool {
        self.elements[r.id()].len() == 1
    }

    /// True while at least one merge is still active.
    #[inline]
    pub fn is_shrunk(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Number of active merges.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Merge the blocks of `members` into one and return its name.
    ///
    /// The name is the representative of the largest block (first one on ties).
    pub fn shrink(&mut self, members: &[Representative]) -> Representative {
        debug_assert!(members.len() >= 2, "shrink needs at least two blocks");
        debug_assert!(
            members.iter().all(|&m| self.labels[m.id()] == m),
            "shrink called with a non-representative"
        );
        debug_assert!(
            {
                let mut sorted = members.to_vec();
                sorted.sort_unstable();
                sorted.windows(2).all(|w| w[0] != w[1])
            },
            "shrink called with duplicate members"
        );
        let mut survivor = members[0];
        for &m in &members[1..] {
            if self.elements[m.id()].len() > self.elements[survivor.id()].len() {
                survivor = m;
            }
        }
        let mut absorbed = Vec::with_capacity(members.len() - 1);
        for &m in members {
            if m == survivor {
                continue;
            }
            // Take the list so its allocation is kept for the matching `expand`.
            let mut block = std::mem::take(&mut self.elements[m.id()]);
            for &v in &block {
                self.labels[v] = survivor;
            }
            absorbed.push((m, block.len()));
            self.elements[survivor.id()].append(&mut block);
            self.elements[m.id()] = block;
        }
        self.frames.push(ShrinkFrame {
            members: members.to_vec(),
            survivor,
            absorbed,
        });
        #[cfg(debug_assertions)]
        self.debug_check_block(survivor);
        survivor
    }

    /// Undo the latest active `shrink`.
    ///
    /// Returns the members in the order they were passed to `shrink`, and the name the
    /// merged block had.
    pub fn expand(&mut self) -> (Vec<Representative>, Representative) {
        let frame = self.frames.pop().expect("no active shrink");
        let survivor = frame.survivor;
        for &(old_name, count) in frame.absorbed.iter().rev() {
            let mut block = std::mem::take(&mut self.elements[old_name.id()]);
            debug_assert!(block.is_empty());
            let tail_start = self.elements[survivor.id()].len() - count;
            block.extend(self.elements[survivor.id()].drain(tail_start..));
            for &v in &block {
                self.labels[v] = old_name;
            }
            self.elements[old_name.id()] = block;
        }
        #[cfg(debug_assertions)]
        for &m in &frame.members {
            self.debug_check_block(m);
        }
        (frame.members, survivor)
    }

    #[cfg(debug_assertions)]
    fn debug_check_block(&self, r: Representative) {
        let block = &self.elements[r.id()];
        debug_assert!(block.contains(&r.id()), "representative outside its block");
        debug_assert!(block.iter().all(|&v| self.labels[v] == r));
    }

    /// Full consistency check over all vertices (tests only; O(n)).
    pub fn validate(&self) -> bool {
        let mut seen = 0usize;
        for (r, block) in self.elements.iter().enumerate() {
            if block.is_empty() {
                continue;
            }
            if self.labels[r].id() != r {
                return false;
            }
            if block.iter().any(|&v| self.labels[v].id() != r) {
                return false;
            }
            seen += block.len();
        }
        seen == self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reps(ids: &[NodeId]) -> Vec<Representative> {
        ids.iter().copied().map(Representative::new).collect()
    }

    #[test]
    fn shrink_then_expand_restores_labels() {
        let mut p = Partition::new(6);
        for v in 0..6 {
            assert_eq!(p.representative_of(v).id(), v);
        }
        assert!(!p.is_shrunk());
        let to_shrink = reps(&[0, 2, 4]);
        let name = p.shrink(&to_shrink);
        assert!(to_shrink.contains(&name));
        for v in [0, 2, 4] {
            assert_eq!(p.representative_of(v), name);
        }
        for v in [1, 3, 5] {
            assert_eq!(p.representative_of(v).id(), v);
        }
        assert!(p.is_shrunk());
        assert_eq!(p.block(name).len(), 3);
        let (members, old_name) = p.expand();
        assert_eq!(old_name, name);
        assert_eq!(members, to_shrink);
        assert!(!p.is_shrunk());
        for v in 0..6 {
            assert_eq!(p.representative_of(v).id(), v);
            assert_eq!(p.block(Representative::new(v)), &[v]);
        }
        assert!(p.validate());
    }

    #[test]
    fn survivor_is_the_largest_block() {
        let mut p = Partition::new(9);
        let inner = p.shrink(&reps(&[5, 6, 7]));
        let outer = p.shrink(&[Representative::new(1), inner, Representative::new(8)]);
        assert_eq!(outer, inner);
        assert_eq!(p.block(outer).len(), 5);
        assert!(p.validate());
    }

    #[test]
    fn nested_expand_is_lifo() {
        let mut p = Partition::new(7);
        let a = p.shrink(&reps(&[0, 1, 2]));
        let b = p.shrink(&reps(&[4, 5, 6]));
        let members = [a, Representative::new(3), b];
        let top = p.shrink(&members);
        assert_eq!(p.depth(), 3);
        for v in 0..7 {
            assert_eq!(p.representative_of(v), top);
        }

        let (m, name) = p.expand();
        assert_eq!(m, members.to_vec());
        assert_eq!(name, top);
        assert_eq!(p.representative_of(0), a);
        assert_eq!(p.representative_of(3).id(), 3);
        assert_eq!(p.representative_of(6), b);

        let (m, name) = p.expand();
        assert_eq!(m, reps(&[4, 5, 6]));
        assert_eq!(name, b);
        let (m, _) = p.expand();
        assert_eq!(m, reps(&[0, 1, 2]));
        assert!(!p.is_shrunk());
        assert!(p.validate());
        for v in 0..7 {
            assert_eq!(p.representative_of(v).id(), v);
        }
    }

    #[test]
    #[should_panic]
    fn expand_without_shrink_panics() {
        let mut p = Partition::new(3);
        let _ = p.expand();
    }
}
