//! Fluent API and edge-list parsing for building Graph instances.

use std::str::FromStr;

use crate::types::{GraphError, GraphResult, Label, EDGE_SEPARATOR, ENTRY_SEPARATOR};

use super::Graph;

/// Fluent builder for constructing a Graph.
pub struct GraphBuilder<T> {
    edges: Vec<(T, T)>,
}

impl<T: Label> GraphBuilder<T> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Add an undirected edge.
    pub fn edge(&mut self, source: T, dest: T) -> &mut Self {
        self.edges.push((source, dest));
        self
    }

    /// Add an edge between each consecutive pair of `labels`.
    pub fn path(&mut self, labels: &[T]) -> &mut Self {
        for pair in labels.windows(2) {
            self.edges.push((pair[0].clone(), pair[1].clone()));
        }
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<T> {
        self.edges.into_iter().collect()
    }
}

impl<T: Label> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an edge list such as `"E-A, A-B, A-C, C-D"`.
///
/// Entries are separated by `,` and endpoints by `-`. Surrounding whitespace
/// is ignored and empty entries are skipped.
pub fn parse_edges(text: &str) -> GraphResult<Graph<String>> {
    let mut builder = GraphBuilder::new();

    for (position, entry) in text.split(ENTRY_SEPARATOR).enumerate() {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (source, dest) = entry
            .split_once(EDGE_SEPARATOR)
            .ok_or_else(|| GraphError::MalformedEdge(entry.to_string()))?;
        if dest.contains(EDGE_SEPARATOR) {
            return Err(GraphError::MalformedEdge(entry.to_string()));
        }

        let (source, dest) = (source.trim(), dest.trim());
        if source.is_empty() || dest.is_empty() {
            return Err(GraphError::EmptyLabel(position));
        }

        builder.edge(source.to_string(), dest.to_string());
    }

    let graph = builder.build();
    log::debug!(
        "parsed edge list: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

impl FromStr for Graph<String> {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_edges(s)
    }
}
