//! Matching over partition representatives that survives blossom shrinking.
//!
//! Model
//! - `mate[r]` is the representative matched to `r`, or `r` itself when `r` is exposed.
//! - `real[r]` is the original vertex inside `r`'s block that carries the matching edge
//!   leaving the block. Only meaningful while `r` is matched.
//! - `cycles` holds one edge list per active `shrink`; `expand` pops them in LIFO order.
//!
//! Invariants
//! - `mate` is an involution: `mate[a] == b` with `a != b` implies `mate[b] == a`.
//! - For a matched representative `r`, `real[r]` lies in the block of `r`.
//!
//! Edge conventions
//! - `augment_along(path, edges)`: `edges[i]` joins `path[i]` (first endpoint) and
//!   `path[i + 1]` (second endpoint).
//! - `shrink(cycle, edges, ..)`: `edges[i]` joins `cycle[i]` and `cycle[(i + 1) % k]`.

use crate::partition::Partition;
use crate::types::{EdgeList, NodeId, ReprVec, Representative};

#[derive(Clone, Debug)]
pub struct Matching {
    mate: ReprVec<Representative>,
    real: ReprVec<NodeId>,
    cycles: Vec<EdgeList>,
    pairs: usize,
}

impl Matching {
    /// Empty matching on `num_nodes` vertices.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            mate: ReprVec::from_fn(num_nodes, Representative::new),
            real: ReprVec::from_fn(num_nodes, |v| v),
            cycles: Vec::new(),
            pairs: 0,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.mate.len()
    }

    /// Number of matched pairs, counting a matched blossom once per edge.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs == 0
    }

    #[inline]
    pub fn is_matched(&self, r: Representative) -> bool {
        self.mate[r] != r
    }

    #[inline]
    pub fn other_end(&self, r: Representative) -> Representative {
        debug_assert!(self.is_matched(r), "other_end of an exposed representative");
        self.mate[r]
    }

    /// Vertex of `r`'s block incident to its matching edge.
    #[inline]
    pub fn real_vertex(&self, r: Representative) -> NodeId {
        debug_assert!(self.is_matched(r));
        self.real[r]
    }

    /// True while a shrunk cycle is waiting for `expand`.
    #[inline]
    pub fn is_shrunk(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Match two exposed, unshrunk vertices.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        let (ra, rb) = (Representative::new(a), Representative::new(b));
        debug_assert!(a != b);
        debug_assert!(!self.is_matched(ra) && !self.is_matched(rb));
        self.pair(ra, a, rb, b);
        self.pairs += 1;
        self.debug_check(&[ra, rb]);
    }

    /// Flip an augmenting path.
    ///
    /// `path` starts and ends on exposed representatives and every interior pair
    /// `(path[2i + 1], path[2i + 2])` is currently matched. Afterwards the pairs
    /// `(path[2i], path[2i + 1])` are matched through `edges[2i]`.
    pub fn augment_along(&mut self, path: &[Representative], edges: &[(NodeId, NodeId)]) {
        debug_assert!(path.len() % 2 == 0 && path.len() >= 2);
        debug_assert_eq!(edges.len() + 1, path.len());
        debug_assert!(!self.is_matched(path[0]));
        debug_assert!(!self.is_matched(path[path.len() - 1]));
        for i in (0..path.len()).step_by(2) {
            if i + 2 < path.len() {
                debug_assert_eq!(
                    self.mate[path[i + 1]],
                    path[i + 2],
                    "path is not alternating"
                );
            }
            let (x, y) = edges[i];
            self.pair(path[i], x, path[i + 1], y);
        }
        self.pairs += 1;
        self.debug_check(path);
    }

    /// Contract an odd cycle into `new_name`.
    ///
    /// Every member is matched to a cycle neighbor except at most one, whose external
    /// matching edge moves to `new_name`. Internal members become exposed until `expand`.
    pub fn shrink(&mut self, cycle: &[Representative], edges: EdgeList, new_name: Representative) {
        let k = cycle.len();
        debug_assert!(k % 2 == 1 && k >= 3, "blossoms are odd cycles");
        debug_assert_eq!(edges.len(), k);
        debug_assert!(cycle.contains(&new_name));
        let mut external: Option<(Representative, NodeId)> = None;
        for (i, &member) in cycle.iter().enumerate() {
            let partner = self.mate[member];
            let prev = cycle[(i + k - 1) % k];
            let next = cycle[(i + 1) % k];
            if partner != member && partner != prev && partner != next {
                debug_assert!(external.is_none(), "two external matching edges");
                external = Some((partner, self.real[member]));
            }
            self.mate[member] = member;
        }
        if let Some((partner, inside)) = external {
            self.mate[new_name] = partner;
            self.mate[partner] = new_name;
            self.real[new_name] = inside;
        }
        self.cycles.push(edges);
        self.debug_check(&[new_name]);
    }

    /// Undo the latest `shrink`, after `partition` has already been expanded.
    ///
    /// The member holding the block's real endpoint keeps the external edge; the rest of
    /// the cycle is paired along the cycle starting next to it. An exposed block anchors
    /// at `cycle[0]`.
    pub fn expand(
        &mut self,
        current_name: Representative,
        cycle: &[Representative],
        partition: &Partition,
    ) {
        let edges = self.cycles.pop().expect("no active shrink");
        let k = cycle.len();
        debug_assert_eq!(edges.len(), k);
        let anchor = if self.is_matched(current_name) {
            let partner = self.mate[current_name];
            let inside = self.real[current_name];
            let covered = partition.representative_of(inside);
            let index = cycle
                .iter()
                .position(|&m| m == covered)
                .expect("real endpoint outside the expanded cycle");
            let outside = self.real[partner];
            self.mate[current_name] = current_name;
            self.pair(covered, inside, partner, outside);
            index
        } else {
            self.mate[cycle[0]] = cycle[0];
            0
        };
        for step in (1..k).step_by(2) {
            let i = (anchor + step) % k;
            let j = (i + 1) % k;
            let (x, y) = edges[i];
            self.pair(cycle[i], x, cycle[j], y);
        }
        self.debug_check(cycle);
    }

    /// Matched pairs as `(low, high)` vertex ids, sorted by `low`.
    ///
    /// Only valid once every shrunk cycle has been expanded again.
    pub fn matching_edges(&self) -> EdgeList {
        debug_assert!(!self.is_shrunk(), "blossoms still shrunk");
        (0..self.num_nodes())
            .filter_map(|v| {
                let other = self.mate[Representative::new(v)].id();
                (v < other).then_some((v, other))
            })
            .collect()
    }

    /// Full invariant check; with a partition, also checks that real endpoints lie in
    /// their blocks. O(n), meant for tests and debugging.
    pub fn validate(&self, partition: Option<&Partition>) -> bool {
        (0..self.num_nodes()).map(Representative::new).all(|r| {
            let partner = self.mate[r];
            if partner == r {
                return true;
            }
            if self.mate[partner] != r {
                return false;
            }
            match partition {
                Some(p) => {
                    p.representative_of(r.id()) != r || p.representative_of(self.real[r]) == r
                }
                None => true,
            }
        })
    }

    #[inline]
    fn pair(&mut self, a: Representative, real_a: NodeId, b: Representative, real_b: NodeId) {
        self.mate[a] = b;
        self.mate[b] = a;
        self.real[a] = real_a;
        self.real[b] = real_b;
    }

    #[inline]
    fn debug_check(&self, touched: &[Representative]) {
        if cfg!(debug_assertions) {
            for &r in touched {
                let partner = self.mate[r];
                debug_assert!(
                    partner == r || self.mate[partner] == r,
                    "matching lost symmetry"
                );
            }
        }
    }
}
