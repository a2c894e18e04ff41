//! Maximum matchings on n×n queen graphs, with the solver counters.
//!
//! Usage:
//!   cargo run -p edmonds --example queen_matching -- 10
//!
//! Prints one line per board size up to the given `n` (default 8); every size should
//! equal ⌊n²/2⌋.

use edmonds::api::{maximum_matching_with, queen, MatchingCfg};

fn main() {
    let max_n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    for n in 1..=max_n {
        let g = queen(n);
        let sol = maximum_matching_with(&g, MatchingCfg::default());
        let s = sol.stats.search;
        println!(
            "queen{n}_{n}: nodes={} edges={} matching={} (expected {}) trees={} blossoms={} frustrated={}",
            g.num_nodes(),
            g.num_edges(),
            sol.edges.len(),
            n * n / 2,
            s.trees,
            s.blossoms,
            s.frustrated,
        );
    }
}
