//! graph-trie — an in-memory undirected graph with traversals, and a prefix trie.
//!
//! The two halves are independent: [`Graph`] stores symmetric adjacency sets
//! over any hashable label and is walked with [`bfs`], [`dfs`] and friends;
//! [`Trie`] stores words for exact and prefix lookups.

pub mod graph;
pub mod trie;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs, bfs_layers, dfs, parse_edges, shortest_path, traverse, Graph, GraphBuilder,
    TraversalOrder, TraversalParams, TraversalResult,
};
pub use trie::{Node, Trie};
pub use types::{GraphError, GraphResult, Label, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS};
