//! Core graph structure — labels + symmetric adjacency sets.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Label;

/// An undirected graph over generic node labels.
///
/// Nodes come into existence the first time an edge mentions them and are
/// never removed. Every adjacency list behaves as a set: linking the same pair
/// twice, in either direction, is a no-op.
#[derive(Clone, Serialize, Deserialize)]
#[serde(
    into = "Vec<(T, T)>",
    from = "Vec<(T, T)>",
    bound(
        serialize = "T: Label + Serialize",
        deserialize = "T: Label + Deserialize<'de>"
    )
)]
pub struct Graph<T> {
    /// All labels, in the order they were first seen.
    nodes: Vec<T>,
    /// Slot index: label -> position in `nodes` and `adjacency`.
    index: HashMap<T, usize>,
    /// Neighbors per slot, in the order they were first linked.
    adjacency: Vec<Vec<T>>,
    /// Neighbor membership per slot, mirroring `adjacency`.
    members: Vec<HashSet<T>>,
}

impl<T: Label> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Connect `source` and `dest`, registering each as the other's neighbor.
    ///
    /// Either label may be new. `source == dest` records a self-loop.
    pub fn add_edge(&mut self, source: T, dest: T) {
        let source_slot = self.slot(&source);
        let dest_slot = self.slot(&dest);
        let forward = self.link(source_slot, dest);
        let backward = self.link(dest_slot, source);
        if forward || backward {
            log::trace!(
                "linked slot {} <-> slot {} ({} nodes)",
                source_slot,
                dest_slot,
                self.nodes.len()
            );
        }
    }

    /// Neighbors of `label`, in the order they were linked.
    /// Unknown labels have no neighbors.
    pub fn neighbors(&self, label: &T) -> &[T] {
        match self.index.get(label) {
            Some(&slot) => &self.adjacency[slot],
            None => &[],
        }
    }

    /// Whether `label` has ever been an edge endpoint.
    pub fn contains_node(&self, label: &T) -> bool {
        self.index.contains_key(label)
    }

    /// Whether `a` and `b` are adjacent.
    pub fn has_edge(&self, a: &T, b: &T) -> bool {
        self.index
            .get(a)
            .is_some_and(|&slot| self.members[slot].contains(b))
    }

    /// All labels in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges. Self-loops count once.
    pub fn edge_count(&self) -> usize {
        self.edge_pairs().count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every undirected edge exactly once, grouped by the endpoint seen first.
    pub fn edges(&self) -> Vec<(T, T)> {
        self.edge_pairs()
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect()
    }

    fn edge_pairs(&self) -> impl Iterator<Item = (&T, &T)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(slot, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |n| self.index.get(*n).is_some_and(|&other| other >= slot))
                    .map(move |n| (&self.nodes[slot], n))
            })
    }

    /// Slot for `label`, allocating one on first sight.
    fn slot(&mut self, label: &T) -> usize {
        if let Some(&slot) = self.index.get(label) {
            return slot;
        }
        let slot = self.nodes.len();
        self.index.insert(label.clone(), slot);
        self.nodes.push(label.clone());
        self.adjacency.push(Vec::new());
        self.members.push(HashSet::new());
        slot
    }

    /// Add `label` to the adjacency set at `slot`. Returns false if present.
    fn link(&mut self, slot: usize, label: T) -> bool {
        if !self.members[slot].insert(label.clone()) {
            return false;
        }
        self.adjacency[slot].push(label);
        true
    }
}

impl<T: Label> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Label> FromIterator<(T, T)> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<T: Label> Extend<(T, T)> for Graph<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (source, dest) in iter {
            self.add_edge(source, dest);
        }
    }
}

impl<T: Label> From<Vec<(T, T)>> for Graph<T> {
    fn from(edges: Vec<(T, T)>) -> Self {
        edges.into_iter().collect()
    }
}

impl<T: Label> From<Graph<T>> for Vec<(T, T)> {
    fn from(graph: Graph<T>) -> Self {
        graph.edges()
    }
}

impl<T: Label> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.nodes.iter().zip(self.adjacency.iter()))
            .finish()
    }
}

/// One line per node: `A -> [B, E]`.
impl<T: Label + fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, neighbors) in self.nodes.iter().zip(self.adjacency.iter()) {
            write!(f, "{} -> [", label)?;
            for (i, neighbor) in neighbors.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", neighbor)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
