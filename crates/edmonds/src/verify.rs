//! Independent checks on matching edge lists.

use crate::error::MatchingError;
use crate::graph::Graph;
use crate::types::{Edge, NodeId};

/// Check that `edges` is a matching of `graph` in normalized form: `first < second`,
/// every edge present in the graph, no vertex covered twice.
pub fn check_matching(graph: &Graph, edges: &[Edge]) -> Result<(), MatchingError> {
    let mut covered = vec![false; graph.num_nodes()];
    for &(a, b) in edges {
        if a >= b {
            return Err(MatchingError::Unnormalized((a, b)));
        }
        if !graph.has_edge(a, b) {
            return Err(MatchingError::NotAnEdge((a, b)));
        }
        for v in [a, b] {
            if std::mem::replace(&mut covered[v], true) {
                return Err(MatchingError::VertexReused(v));
            }
        }
    }
    Ok(())
}

/// Vertices of `0..num_nodes` covered by no edge of `edges`.
pub fn exposed_vertices(num_nodes: usize, edges: &[Edge]) -> Vec<NodeId> {
    let mut covered = vec![false; num_nodes];
    for &(a, b) in edges {
        covered[a] = true;
        covered[b] = true;
    }
    (0..num_nodes).filter(|&v| !covered[v]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::gen;

    #[test]
    fn rejects_each_kind_of_violation() {
        let g = gen::cycle(6);
        assert_eq!(check_matching(&g, &[(0, 1), (2, 3), (4, 5)]), Ok(()));
        assert_eq!(check_matching(&g, &[]), Ok(()));
        assert_eq!(
            check_matching(&g, &[(1, 0)]),
            Err(MatchingError::Unnormalized((1, 0)))
        );
        assert_eq!(
            check_matching(&g, &[(0, 3)]),
            Err(MatchingError::NotAnEdge((0, 3)))
        );
        assert_eq!(
            check_matching(&g, &[(0, 1), (1, 2)]),
            Err(MatchingError::VertexReused(1))
        );
    }

    #[test]
    fn exposed_lists_uncovered_vertices() {
        assert_eq!(exposed_vertices(5, &[(1, 3)]), vec![0, 2, 4]);
        assert!(exposed_vertices(2, &[(0, 1)]).is_empty());
    }
}
