//! Error types for the graph-trie library.

use thiserror::Error;

/// Errors raised by the checked graph queries and the edge-list parser.
///
/// The unchecked operations (`add_edge`, `bfs`, `dfs`, every trie call) are
/// total and never produce one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A query named a label that was never an edge endpoint.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// An edge-list entry is not of the form `a-b`.
    #[error("Malformed edge entry: {0:?}")]
    MalformedEdge(String),

    /// An edge-list entry has a blank endpoint.
    #[error("Edge entry {0} has an empty label")]
    EmptyLabel(usize),
}

impl GraphError {
    /// Build a `NodeNotFound` from any debuggable label.
    pub fn node_not_found<T: std::fmt::Debug>(label: &T) -> Self {
        Self::NodeNotFound(format!("{:?}", label))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
