//! Maximum-cardinality matching in general graphs (Edmonds' blossom algorithm).
//!
//! Layers, leaf first:
//! - `partition`: vertex blocks (blossoms) with LIFO undo.
//! - `matching`: pairing over block representatives that survives shrink/expand.
//! - `tree`: alternating tree per exposed root (extend, contract, augment, unshrink).
//! - `search`: one tree per exposed vertex until all are matched or a tree is frustrated.
//! - `maximum`: allowed-vertex controller on top of the search, with leaf pre-reduction.
//!
//! Around the core: `graph` (adjacency lists, DIMACS, generators), `verify` (independent
//! checks of edge lists), `error`.
//!
//! API Policy
//! - Entry points are `maximum_matching`, `maximum_matching_with` and `perfect_matching`.
//!   The layer types are public for tests, benchmarks and experiments; their invariants
//!   are checked with `debug_assert!` only.

pub mod api;
pub mod error;
pub mod graph;
pub mod matching;
pub mod maximum;
pub mod partition;
pub mod search;
pub mod tree;
pub mod types;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GraphError, MatchingError};
pub use graph::Graph;
pub use maximum::{maximum_matching, maximum_matching_with, MatchingCfg, Solution, SolveStats};
pub use search::{perfect_matching, SearchOutcome, SearchStats};
pub use types::{Edge, EdgeList, NodeId};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graph::dimacs::{read_dimacs, write_dimacs, write_edges};
    pub use crate::graph::gen::{GnpParams, ReplayToken};
    pub use crate::graph::Graph;
    pub use crate::maximum::{maximum_matching, maximum_matching_with, MatchingCfg, Solution};
    pub use crate::search::perfect_matching;
    pub use crate::types::{Edge, EdgeList, NodeId};
    pub use crate::verify::check_matching;
    pub use crate::{GraphError, MatchingError};
}
