//! Perfect-matching search: one alternating tree per exposed vertex.
//!
//! Model
//! - Roots are picked among allowed, exposed vertices, scanning forward (with wrap-around)
//!   from just after the previous root.
//! - The frontier is a LIFO of `(vertex, neighbor cursor)` entries. A vertex's adjacency
//!   list is walked only when its entry is on top, and disallowed neighbors are skipped
//!   then, so vertices whose edges are never needed cost O(1).
//! - Every vertex on the frontier is even (or inside an even blossom) when its edges are
//!   popped; odd vertices are scheduled only once a blossom absorbs them.
//!
//! A tree either augments (the matching grows by one edge and every blossom is expanded)
//! or runs out of edges; the latter is a frustrated tree whose vertices witness that the
//! allowed subgraph has no perfect matching.

use crate::error::MatchingError;
use crate::graph::Graph;
use crate::matching::Matching;
use crate::partition::Partition;
use crate::tree::{AlternatingTree, TreeBuffers};
use crate::types::{EdgeList, NodeId};

/// Result of `PerfectMatchingSearch::run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every allowed vertex is matched.
    Perfect,
    /// Vertices of a tree that could not be augmented.
    Frustrated(Vec<NodeId>),
}

/// Counters accumulated over the lifetime of a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub trees: usize,
    pub augmentations: usize,
    pub blossoms: usize,
    pub frustrated: usize,
}

#[derive(Clone, Debug, Default)]
struct Frontier {
    pending: Vec<(NodeId, usize)>,
}

impl Frontier {
    #[inline]
    fn schedule(&mut self, vertex: NodeId) {
        self.pending.push((vertex, 0));
    }

    /// Next edge `(x, y)` with `y` allowed, or `None` once every scheduled list is spent.
    fn next_edge(&mut self, graph: &Graph, allowed: &[bool]) -> Option<(NodeId, NodeId)> {
        while let Some((vertex, cursor)) = self.pending.last_mut() {
            let neighbors = graph.neighbors(*vertex);
            while *cursor < neighbors.len() {
                let y = neighbors[*cursor];
                *cursor += 1;
                if allowed[y] {
                    return Some((*vertex, y));
                }
            }
            self.pending.pop();
        }
        None
    }

    fn clear(&mut self) {
        self.pending.clear();
    }
}

enum TreeEnd {
    Augmented,
    Frustrated,
}

pub struct PerfectMatchingSearch<'g> {
    graph: &'g Graph,
    matching: Matching,
    partition: Partition,
    buffers: TreeBuffers,
    frontier: Frontier,
    next_root: NodeId,
    stats: SearchStats,
}

impl<'g> PerfectMatchingSearch<'g> {
    /// Search starting from the empty matching.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_matching(graph, Matching::new(graph.num_nodes()))
    }

    /// Search starting from `matching`, which must have no shrunk blossom.
    pub fn with_matching(graph: &'g Graph, matching: Matching) -> Self {
        let n = graph.num_nodes();
        assert_eq!(
            matching.num_nodes(),
            n,
            "matching and graph disagree on the vertex count"
        );
        assert!(!matching.is_shrunk(), "initial matching is shrunk");
        Self {
            graph,
            matching,
            partition: Partition::new(n),
            buffers: TreeBuffers::new(n),
            frontier: Frontier::default(),
            next_root: 0,
            stats: SearchStats::default(),
        }
    }

    pub fn matching(&self) -> &Matching {
        &self.matching
    }

    pub fn matching_edges(&self) -> EdgeList {
        self.matching.matching_edges()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Grow trees from exposed allowed vertices until all of them are matched or one tree
    /// is frustrated.
    ///
    /// Vertices with `allowed[v] == false` are invisible to the search; callers must not
    /// disallow one endpoint of a matched edge while allowing the other.
    pub fn run(&mut self, allowed: &[bool]) -> SearchOutcome {
        assert_eq!(
            allowed.len(),
            self.graph.num_nodes(),
            "allowed mask has the wrong length"
        );
        while let Some(root) = self.next_exposed_root(allowed) {
            self.stats.trees += 1;
            match self.grow(root, allowed) {
                TreeEnd::Augmented => self.stats.augmentations += 1,
                TreeEnd::Frustrated => {
                    self.stats.frustrated += 1;
                    let witness = self.buffers.tree_vertices().to_vec();
                    tracing::debug!(root, size = witness.len(), "frustrated tree");
                    return SearchOutcome::Frustrated(witness);
                }
            }
        }
        SearchOutcome::Perfect
    }

    fn next_exposed_root(&mut self, allowed: &[bool]) -> Option<NodeId> {
        let n = self.graph.num_nodes();
        for offset in 0..n {
            let v = (self.next_root + offset) % n;
            let r = self.partition.representative_of(v);
            if allowed[v] && !self.matching.is_matched(r) {
                self.next_root = (v + 1) % n;
                return Some(v);
            }
        }
        None
    }

    fn grow(&mut self, root: NodeId, allowed: &[bool]) -> TreeEnd {
        let Self {
            graph,
            matching,
            partition,
            buffers,
            frontier,
            stats,
            ..
        } = self;
        let graph = *graph;
        let mut tree = AlternatingTree::new(root, matching, partition, buffers);
        frontier.clear();
        frontier.schedule(root);

        while let Some((x, y)) = frontier.next_edge(graph, allowed) {
            let rx = tree.representative_of(x);
            let ry = tree.representative_of(y);
            if rx == ry {
                continue;
            }
            debug_assert!(tree.is_even(rx), "frontier vertex is not even");
            if tree.is_tree_node(ry) {
                if tree.is_even(ry) {
                    stats.blossoms += 1;
                    for &v in tree.shrink_fundamental_circuit(rx, ry, x, y) {
                        frontier.schedule(v);
                    }
                }
            } else if tree.matching().is_matched(ry) {
                let mate = tree.matching().other_end(ry);
                tree.extend(rx, x, ry);
                frontier.schedule(mate.id());
            } else {
                tree.augment_and_unshrink(rx, x, ry);
                return TreeEnd::Augmented;
            }
        }
        tree.unshrink();
        TreeEnd::Frustrated
    }
}

/// Perfect matching of `graph`, or the vertices of a frustrated tree proving that none
/// exists.
pub fn perfect_matching(graph: &Graph) -> Result<EdgeList, MatchingError> {
    let all = vec![true; graph.num_nodes()];
    let mut search = PerfectMatchingSearch::new(graph);
    let outcome = search.run(&all);
    let stats = search.stats();
    tracing::debug!(
        nodes = graph.num_nodes(),
        trees = stats.trees,
        blossoms = stats.blossoms,
        "perfect matching search done"
    );
    match outcome {
        SearchOutcome::Perfect => Ok(search.matching_edges()),
        SearchOutcome::Frustrated(witness) => Err(MatchingError::NoPerfectMatching { witness }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::gen;
    use crate::verify::check_matching;

    #[test]
    fn odd_cycle_is_frustrated() {
        let g = gen::cycle(5);
        let mut search = PerfectMatchingSearch::new(&g);
        let outcome = search.run(&[true; 5]);
        let SearchOutcome::Frustrated(mut witness) = outcome else {
            panic!("C5 has no perfect matching");
        };
        witness.sort_unstable();
        assert_eq!(witness, vec![0, 1, 2, 3, 4]);
        assert_eq!(search.matching().len(), 2);
        assert!(search.matching().validate(None));
        check_matching(&g, &search.matching_edges()).unwrap();
        assert_eq!(search.stats().frustrated, 1);
        assert!(search.stats().blossoms >= 1);
    }

    #[test]
    fn even_cycle_is_perfect() {
        let g = gen::cycle(6);
        let edges = perfect_matching(&g).unwrap();
        assert_eq!(edges.len(), 3);
        check_matching(&g, &edges).unwrap();
    }

    #[test]
    fn complete_and_petersen_are_perfect() {
        for g in [
            gen::complete(4),
            gen::complete(8),
            gen::petersen(),
            gen::queen(6),
        ] {
            let edges = perfect_matching(&g).unwrap();
            assert_eq!(edges.len(), g.num_nodes() / 2);
            check_matching(&g, &edges).unwrap();
        }
    }

    #[test]
    fn odd_vertex_count_reports_witness() {
        match perfect_matching(&gen::complete(5)) {
            Err(MatchingError::NoPerfectMatching { witness }) => assert!(!witness.is_empty()),
            other => panic!("K5 has no perfect matching, got {other:?}"),
        }
    }

    #[test]
    fn disallowed_vertices_are_invisible() {
        // Path 0-1-2-3-4: dropping vertex 4 leaves a perfectly matchable path.
        let g = gen::path(5);
        let mut search = PerfectMatchingSearch::new(&g);
        let outcome = search.run(&[true, true, true, true, false]);
        assert_eq!(outcome, SearchOutcome::Perfect);
        assert_eq!(search.matching_edges(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn starts_from_a_given_matching() {
        // 0-1=2-3: the search has to flip the middle edge.
        let g = gen::path(4);
        let mut m = Matching::new(4);
        m.add_edge(1, 2);
        let mut search = PerfectMatchingSearch::with_matching(&g, m);
        assert_eq!(search.run(&[true; 4]), SearchOutcome::Perfect);
        assert_eq!(search.matching_edges(), vec![(0, 1), (2, 3)]);
        assert_eq!(search.stats().augmentations, 1);
    }

    #[test]
    fn augments_through_a_blossom() {
        // Triangle 0-1-2 with 1=2 matched, pendant 3 on 2: the tree from 0 contracts the
        // triangle before it can reach 3.
        let g = gen::triangle_with_pendant();
        let mut m = Matching::new(4);
        m.add_edge(1, 2);
        let mut search = PerfectMatchingSearch::with_matching(&g, m);
        assert_eq!(search.run(&[true; 4]), SearchOutcome::Perfect);
        assert_eq!(search.matching_edges(), vec![(0, 1), (2, 3)]);
        assert_eq!(search.stats().blossoms, 1);
        assert_eq!(search.stats().trees, 1);
    }
}
