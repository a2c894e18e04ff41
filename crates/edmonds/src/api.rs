//! Curated surface for drivers and experiments (UNSTABLE).
//!
//! Groups the entry points by layer so callers do not have to know the module layout.
//! Breaking changes are allowed.

// Graph input/output
pub use crate::graph::dimacs::{read_dimacs, write_dimacs, write_edges};
pub use crate::graph::gen::{
    complete, cycle, gnp, path, petersen, queen, star, triangle_with_pendant, GnpParams,
    ReplayToken,
};
pub use crate::graph::{Graph, Node};
// Solvers
pub use crate::maximum::{
    maximum_matching, maximum_matching_with, MatchingCfg, Solution, SolveStats,
};
pub use crate::search::{perfect_matching, PerfectMatchingSearch, SearchOutcome, SearchStats};
// Core layers
pub use crate::matching::Matching;
pub use crate::partition::Partition;
pub use crate::tree::{AlternatingTree, NodeStatus, TreeBuffers};
pub use crate::types::{Edge, EdgeList, NodeId, ReprVec, Representative};
// Checks
pub use crate::verify::{check_matching, exposed_vertices};
