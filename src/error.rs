use thiserror::Error;

use crate::edge::{Weight, MAX_WEIGHT};
use crate::vertex::{VertexId, MAX_VERTEX_ID};

/// Invariant violations in the graph model.
///
/// These are enforced at data-entry points only (adding vertices/edges,
/// importing a document); algorithms may assume a well-formed graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex id {0} is out of range (0..={MAX_VERTEX_ID})")]
    IdOutOfRange(VertexId),
    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexId),
    #[error("unknown vertex {0}")]
    UnknownVertex(VertexId),
    #[error("an edge between {0} and {1} already exists")]
    DuplicateEdge(VertexId, VertexId),
    #[error("no edge between {0} and {1}")]
    UnknownEdge(VertexId, VertexId),
    #[error("weight {0} is out of range (0..={MAX_WEIGHT})")]
    WeightOutOfRange(Weight),
}

/// A structural pre-call criterion the current graph does not meet.
///
/// Not a fault: the algorithm simply does not run, and the message is shown
/// to the user as a blocking notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the graph must be weighted")]
    NotWeighted,
    #[error("the graph must be undirected")]
    MustBeUndirected,
    #[error("the graph must be directed")]
    MustBeDirected,
    #[error("the graph must be connected")]
    NotConnected,
    #[error("the graph must be acyclic")]
    HasCycle,
}

/// Failures at the JSON persistence boundary.
///
/// A malformed document is rejected wholesale; the in-memory graph is left
/// untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("malformed graph document: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("invalid graph document: {0}")]
    Invalid(#[from] GraphError),
}
