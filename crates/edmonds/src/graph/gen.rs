//! Deterministic graph families for tests, benchmarks and the CLI.
//!
//! Random graphs use a replay token `(seed, index)` mixed into a single `StdRng`, so a
//! stream of instances can be regenerated one index at a time.

use super::Graph;
use crate::error::GraphError;
use crate::types::NodeId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token: reproducible and indexable draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let salt = mix(self.index.wrapping_add(0x9e3779b97f4a7c15));
        StdRng::seed_from_u64(mix(self.seed ^ salt))
    }
}

/// Erdős–Rényi parameters: every pair is an edge independently with `edge_probability`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GnpParams {
    pub nodes: usize,
    pub edge_probability: f64,
}

impl GnpParams {
    pub fn validate(&self) -> Result<(), GraphError> {
        let p = self.edge_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(GraphError::InvalidParams(format!(
                "edge_probability must lie in [0, 1], got {p}"
            )));
        }
        Ok(())
    }
}

// Families below only add valid edges, so insertion cannot fail.
fn build(num_nodes: usize, edges: impl IntoIterator<Item = (NodeId, NodeId)>) -> Graph {
    let mut g = Graph::new(num_nodes);
    for (a, b) in edges {
        g.add_edge(a, b).expect("invalid generator edge");
    }
    g
}

pub fn path(n: usize) -> Graph {
    build(n, (1..n).map(|i| (i - 1, i)))
}

/// Cycle on `n` vertices; fewer than 3 vertices give a path.
pub fn cycle(n: usize) -> Graph {
    let mut g = path(n);
    if n >= 3 {
        g.add_edge(n - 1, 0).expect("cycle closing edge");
    }
    g
}

pub fn complete(n: usize) -> Graph {
    build(n, (0..n).flat_map(|a| (a + 1..n).map(move |b| (a, b))))
}

/// Center 0 joined to `leaves` leaves.
pub fn star(leaves: usize) -> Graph {
    build(leaves + 1, (1..=leaves).map(|leaf| (0, leaf)))
}

/// Outer 5-cycle `0..5`, inner pentagram `5..10`, spokes `i`–`i+5`.
pub fn petersen() -> Graph {
    let outer = (0..5).map(|i| (i, (i + 1) % 5));
    let inner = (0..5).map(|i| (5 + i, 5 + (i + 2) % 5));
    let spokes = (0..5).map(|i| (i, i + 5));
    build(10, outer.chain(inner).chain(spokes))
}

/// Squares of an `n`×`n` board, adjacent when a queen on one attacks the other.
///
/// Square `(row, col)` has id `row * n + col`.
pub fn queen(n: usize) -> Graph {
    let mut g = Graph::new(n * n);
    for a in 0..n * n {
        let (ra, ca) = (a / n, a % n);
        for b in a + 1..n * n {
            let (rb, cb) = (b / n, b % n);
            if ra == rb || ca == cb || ra.abs_diff(rb) == ca.abs_diff(cb) {
                g.add_edge(a, b).expect("queen edge");
            }
        }
    }
    g
}

/// Triangle `0-1-2` plus the pendant edge `2-3`.
pub fn triangle_with_pendant() -> Graph {
    build(4, [(0, 1), (1, 2), (0, 2), (2, 3)])
}

pub fn gnp(params: GnpParams, tok: ReplayToken) -> Result<Graph, GraphError> {
    params.validate()?;
    let mut rng = tok.to_std_rng();
    let n = params.nodes;
    let mut g = Graph::new(n);
    for a in 0..n {
        for b in a + 1..n {
            if rng.gen_bool(params.edge_probability) {
                g.add_edge(a, b)?;
            }
        }
    }
    Ok(g)
}
