//! In-memory undirected graph and its traversals.

pub mod adjacency;
pub mod builder;
pub mod traversal;

pub use adjacency::Graph;
pub use builder::{parse_edges, GraphBuilder};
pub use traversal::{
    bfs, bfs_layers, dfs, shortest_path, traverse, TraversalOrder, TraversalParams,
    TraversalResult,
};
