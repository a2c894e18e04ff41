//! Error types of the library.
//!
//! - `GraphError`: malformed graphs and DIMACS input, rejected before any matching runs.
//! - `MatchingError`: a perfect matching that does not exist, or an edge list that is not
//!   a matching of the given graph.

use crate::types::{Edge, NodeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("loop at vertex {0}")]
    Loop(NodeId),
    #[error("vertex {node} out of range for a graph with {num_nodes} vertices")]
    NodeOutOfRange { node: NodeId, num_nodes: usize },
    #[error("DIMACS line {line}: {msg}")]
    Dimacs { line: usize, msg: String },
    #[error("invalid generator parameters: {0}")]
    InvalidParams(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn dimacs(line: usize, msg: impl Into<String>) -> Self {
        GraphError::Dimacs {
            line,
            msg: msg.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchingError {
    /// Some tree could not be augmented; `witness` holds its vertices.
    #[error("graph has no perfect matching (frustrated tree of {} vertices)", witness.len())]
    NoPerfectMatching { witness: Vec<NodeId> },
    #[error("edge ({}, {}) is not normalized (first endpoint must be smaller)", .0.0, .0.1)]
    Unnormalized(Edge),
    #[error("edge ({}, {}) is not an edge of the graph", .0.0, .0.1)]
    NotAnEdge(Edge),
    #[error("vertex {0} is covered by more than one matching edge")]
    VertexReused(NodeId),
}
