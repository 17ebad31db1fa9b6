//! Shared types for the graph-trie library.

pub mod error;

use std::fmt::Debug;
use std::hash::Hash;

pub use error::{GraphError, GraphResult};

/// What a type needs to be usable as a graph node label.
pub trait Label: Eq + Hash + Clone + Debug {}
impl<T> Label for T where T: Eq + Hash + Clone + Debug {}

/// Separates the two endpoints of an edge-list entry: `A-B`.
pub const EDGE_SEPARATOR: char = '-';

/// Separates edge-list entries: `A-B, B-C`.
pub const ENTRY_SEPARATOR: char = ',';

/// Default traversal depth limit (unbounded).
pub const DEFAULT_MAX_DEPTH: u32 = u32::MAX;

/// Default traversal result limit (unbounded).
pub const DEFAULT_MAX_RESULTS: usize = usize::MAX;
