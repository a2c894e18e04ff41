//! Maximum-cardinality matching on top of the perfect-matching search.
//!
//! Purpose
//! - Drive `PerfectMatchingSearch` over a shrinking set of allowed vertices until every
//!   allowed vertex is matched.
//!
//! Model
//! - Leaf pass: a degree-1 vertex is matched to its neighbor unless another leaf already
//!   claimed it. Both are disallowed; a leaf whose neighbor is taken is disallowed alone.
//!   Any maximum matching can be rewritten to use such a leaf edge, so this is exact.
//! - Vertices with no allowed neighbor are disallowed.
//! - A frustrated tree is removed as a whole (Edmonds–Gallai: none of its vertices can
//!   gain a partner among the remaining ones), then neighbors left isolated are removed.
//! - Stops once the search reports no exposed allowed vertex or fewer than two allowed
//!   vertices remain. Matching edges between removed vertices are kept.

use crate::graph::Graph;
use crate::matching::Matching;
use crate::search::{PerfectMatchingSearch, SearchOutcome, SearchStats};
use crate::types::{EdgeList, NodeId, Representative};

/// Controller settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchingCfg {
    /// Match degree-1 vertices before the first search.
    pub leaf_reduction: bool,
}

impl Default for MatchingCfg {
    fn default() -> Self {
        Self {
            leaf_reduction: true,
        }
    }
}

/// Counters of one maximum-matching computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Edges fixed by the leaf pass.
    pub leaf_edges: usize,
    /// Vertices removed because they had no allowed neighbor left.
    pub isolated_removed: usize,
    /// Vertices removed as part of a frustrated tree.
    pub frustrated_removed: usize,
    pub search: SearchStats,
}

/// Matching edges (`first < second`, sorted) and run counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub edges: EdgeList,
    pub stats: SolveStats,
}

/// Allowed-vertex mask with per-vertex counts of allowed neighbors.
struct AllowedSet<'g> {
    graph: &'g Graph,
    allowed: Vec<bool>,
    degree: Vec<usize>,
    count: usize,
}

impl<'g> AllowedSet<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.num_nodes();
        Self {
            graph,
            allowed: vec![true; n],
            degree: (0..n).map(|v| graph.degree(v)).collect(),
            count: n,
        }
    }

    #[inline]
    fn contains(&self, v: NodeId) -> bool {
        self.allowed[v]
    }

    /// Remove `vertices`; returns how many of their neighbors became isolated and were
    /// removed too.
    fn remove(&mut self, vertices: &[NodeId]) -> usize {
        let graph = self.graph;
        for &v in vertices {
            debug_assert!(self.allowed[v], "vertex {v} removed twice");
            self.allowed[v] = false;
        }
        self.count -= vertices.len();
        let mut isolated = 0;
        for &v in vertices {
            for &nb in graph.neighbors(v) {
                if !self.allowed[nb] {
                    continue;
                }
                self.degree[nb] -= 1;
                if self.degree[nb] == 0 {
                    self.allowed[nb] = false;
                    self.count -= 1;
                    isolated += 1;
                }
            }
        }
        isolated
    }

    /// Remove every allowed vertex without allowed neighbors.
    fn remove_isolated(&mut self) -> usize {
        let mut isolated = 0;
        for v in 0..self.allowed.len() {
            if self.allowed[v] && self.degree[v] == 0 {
                self.allowed[v] = false;
                self.count -= 1;
                isolated += 1;
            }
        }
        isolated
    }
}

/// Match every leaf to its neighbor when that neighbor is still free.
///
/// Returns the number of edges added and the number of vertices isolated on the way.
fn match_leaves(
    graph: &Graph,
    matching: &mut Matching,
    allowed: &mut AllowedSet<'_>,
) -> (usize, usize) {
    let (mut added, mut isolated) = (0, 0);
    for leaf in 0..graph.num_nodes() {
        if graph.degree(leaf) != 1 || !allowed.contains(leaf) {
            continue;
        }
        let nb = graph.neighbors(leaf)[0];
        // A disallowed neighbor of an allowed vertex is always matched already.
        if allowed.contains(nb) && !matching.is_matched(Representative::new(nb)) {
            matching.add_edge(leaf, nb);
            added += 1;
            isolated += allowed.remove(&[leaf, nb]);
        } else {
            isolated += allowed.remove(&[leaf]);
        }
    }
    (added, isolated)
}

/// Maximum-cardinality matching of `graph` with the default settings.
pub fn maximum_matching(graph: &Graph) -> EdgeList {
    maximum_matching_with(graph, MatchingCfg::default()).edges
}

pub fn maximum_matching_with(graph: &Graph, cfg: MatchingCfg) -> Solution {
    let mut stats = SolveStats::default();
    let mut allowed = AllowedSet::new(graph);
    let mut matching = Matching::new(graph.num_nodes());
    if cfg.leaf_reduction {
        let (added, isolated) = match_leaves(graph, &mut matching, &mut allowed);
        stats.leaf_edges = added;
        stats.isolated_removed += isolated;
    }
    stats.isolated_removed += allowed.remove_isolated();

    let mut search = PerfectMatchingSearch::with_matching(graph, matching);
    while allowed.count >= 2 {
        match search.run(&allowed.allowed) {
            SearchOutcome::Perfect => break,
            SearchOutcome::Frustrated(witness) => {
                stats.frustrated_removed += witness.len();
                stats.isolated_removed += allowed.remove(&witness);
            }
        }
    }
    stats.search = search.stats();
    let edges = search.matching_edges();
    tracing::debug!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        matching = edges.len(),
        leaf_edges = stats.leaf_edges,
        frustrated = stats.search.frustrated,
        blossoms = stats.search.blossoms,
        "maximum matching done"
    );
    Solution { edges, stats }
}
