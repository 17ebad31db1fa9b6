//! Prefix tree for word storage and prefix lookups.

pub mod node;
pub mod prefix_tree;

pub use node::Node;
pub use prefix_tree::Trie;
