//! Undirected graph with adjacency lists.
//!
//! Purpose
//! - Hold the input of the matching algorithms: `n` vertices with dense ids `0..n` and an
//!   adjacency list per vertex, so neighbor iteration costs O(degree).
//! - Provide the relabelling helpers used by drivers (`delete_nodes`, `shuffled`,
//!   `with_universal_vertices`).
//!
//! Model
//! - Every undirected edge is stored twice, once in each endpoint's list.
//! - Loops are rejected on insertion; parallel edges are kept.
//!
//! Code cross-refs: `dimacs` (text format), `gen` (deterministic families).

pub mod dimacs;
pub mod gen;

use crate::error::GraphError;
use crate::types::{Edge, NodeId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::TryReserveError;

/// One vertex and its neighbors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    neighbors: Vec<NodeId>,
}

impl Node {
    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
    num_edges: usize,
}

impl Graph {
    /// `num_nodes` isolated vertices.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            nodes: vec![Node::default(); num_nodes],
            num_edges: 0,
        }
    }

    /// Like `new`, but reports a vertex count that cannot be allocated instead of aborting.
    pub fn try_new(num_nodes: usize) -> Result<Self, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(num_nodes)?;
        nodes.resize_with(num_nodes, Node::default);
        Ok(Self {
            nodes,
            num_edges: 0,
        })
    }

    /// Build from an edge list; fails on the first invalid edge.
    pub fn from_edges(num_nodes: usize, edges: &[Edge]) -> Result<Self, GraphError> {
        let mut g = Self::new(num_nodes);
        for &(a, b) in edges {
            g.add_edge(a, b)?;
        }
        Ok(g)
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        let num_nodes = self.num_nodes();
        for node in [a, b] {
            if node >= num_nodes {
                return Err(GraphError::NodeOutOfRange { node, num_nodes });
            }
        }
        if a == b {
            return Err(GraphError::Loop(a));
        }
        self.nodes[a].neighbors.push(b);
        self.nodes[b].neighbors.push(a);
        self.num_edges += 1;
        Ok(())
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].neighbors
    }

    #[inline]
    pub fn degree(&self, id: NodeId) -> usize {
        self.nodes[id].degree()
    }

    /// Every edge once, as `(low, high)`, in order of the low endpoint's adjacency list.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().enumerate().flat_map(|(a, node)| {
            node.neighbors
                .iter()
                .filter(move |&&b| a < b)
                .map(move |&b| (a, b))
        })
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        if a >= self.num_nodes() || b >= self.num_nodes() {
            return false;
        }
        let (from, to) = if self.degree(a) <= self.degree(b) {
            (a, b)
        } else {
            (b, a)
        };
        self.nodes[from].neighbors.contains(&to)
    }

    /// Remove the vertices flagged in `mask` and renumber the rest in increasing order.
    ///
    /// Returns the new-to-old id map.
    pub fn delete_nodes(&mut self, mask: &[bool]) -> Vec<NodeId> {
        assert_eq!(mask.len(), self.num_nodes(), "mask length != num_nodes");
        let mut new_id = vec![NodeId::MAX; self.num_nodes()];
        let mut old_of_new = Vec::with_capacity(self.num_nodes());
        for (old, &deleted) in mask.iter().enumerate() {
            if !deleted {
                new_id[old] = old_of_new.len();
                old_of_new.push(old);
            }
        }
        let mut nodes = Vec::with_capacity(old_of_new.len());
        let mut twice_edges = 0;
        for &old in &old_of_new {
            let neighbors: Vec<NodeId> = self.nodes[old]
                .neighbors
                .iter()
                .filter(|&&nb| !mask[nb])
                .map(|&nb| new_id[nb])
                .collect();
            twice_edges += neighbors.len();
            nodes.push(Node { neighbors });
        }
        self.nodes = nodes;
        self.num_edges = twice_edges / 2;
        old_of_new
    }

    /// Copy relabelled by a uniform permutation drawn from `seed`.
    ///
    /// Neighbor lists of the copy are sorted. The second value maps new ids to the ids
    /// of `self`.
    pub fn shuffled(&self, seed: u64) -> (Graph, Vec<NodeId>) {
        let n = self.num_nodes();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut old_of_new: Vec<NodeId> = (0..n).collect();
        old_of_new.shuffle(&mut rng);
        let mut new_of_old = vec![0; n];
        for (new, &old) in old_of_new.iter().enumerate() {
            new_of_old[old] = new;
        }
        let nodes = old_of_new
            .iter()
            .map(|&old| {
                let mut neighbors: Vec<NodeId> = self.nodes[old]
                    .neighbors
                    .iter()
                    .map(|&nb| new_of_old[nb])
                    .collect();
                neighbors.sort_unstable();
                Node { neighbors }
            })
            .collect();
        let g = Graph {
            nodes,
            num_edges: self.num_edges,
        };
        (g, old_of_new)
    }

    /// Copy with `k` extra vertices, each adjacent to every original vertex.
    pub fn with_universal_vertices(&self, k: usize) -> Graph {
        let n = self.num_nodes();
        let mut g = self.clone();
        g.nodes.extend((0..k).map(|_| Node {
            neighbors: (0..n).collect(),
        }));
        for node in &mut g.nodes[..n] {
            node.neighbors.extend(n..n + k);
        }
        g.num_edges += n * k;
        g
    }
}

#[cfg(test)]
mod tests;
