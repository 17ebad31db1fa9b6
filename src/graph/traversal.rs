//! Graph traversal algorithms (BFS, DFS, layered BFS, shortest path).

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult, Label, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS};

use super::Graph;

/// Which frontier discipline a traversal uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// FIFO queue: nodes come out in order of distance from the start.
    #[default]
    BreadthFirst,
    /// LIFO stack: the most recently pushed neighbor is explored first.
    DepthFirst,
}

/// Parameters for a checked traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalParams {
    /// Frontier discipline.
    pub order: TraversalOrder,
    /// Nodes at this many hops are visited but not expanded. Every node
    /// within this many hops of the start is returned.
    pub max_depth: u32,
    /// Maximum number of nodes to return.
    pub max_results: usize,
}

impl TraversalParams {
    /// Unbounded breadth-first traversal.
    pub fn breadth_first() -> Self {
        Self::default()
    }

    /// Unbounded depth-first traversal.
    pub fn depth_first() -> Self {
        Self {
            order: TraversalOrder::DepthFirst,
            ..Self::default()
        }
    }

    /// Stop expanding at `max_depth` hops.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Return at most `max_results` nodes.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl Default for TraversalParams {
    fn default() -> Self {
        Self {
            order: TraversalOrder::BreadthFirst,
            max_depth: DEFAULT_MAX_DEPTH,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Result of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult<T: Label> {
    /// Visited labels in traversal order.
    pub visited: Vec<T>,
    /// Fewest hops at which each label was reached.
    pub depths: HashMap<T, u32>,
}

/// Pending nodes, tagged with the hop count they were reached at.
/// The visited check happens at pop time, so duplicates are allowed.
struct Frontier<T> {
    order: TraversalOrder,
    pending: VecDeque<(T, u32)>,
}

impl<T> Frontier<T> {
    fn new(order: TraversalOrder) -> Self {
        Self {
            order,
            pending: VecDeque::new(),
        }
    }

    fn push(&mut self, label: T, depth: u32) {
        self.pending.push_back((label, depth));
    }

    fn pop(&mut self) -> Option<(T, u32)> {
        match self.order {
            TraversalOrder::BreadthFirst => self.pending.pop_front(),
            TraversalOrder::DepthFirst => self.pending.pop_back(),
        }
    }
}

fn walk<T: Label>(graph: &Graph<T>, start: &T, params: &TraversalParams) -> TraversalResult<T> {
    // With a depth limit, a node first reached along a long path may be
    // reached again closer to the start; it is then re-expanded at the
    // smaller depth but listed only once.
    let bounded = params.max_depth != DEFAULT_MAX_DEPTH;
    let mut visited_order: Vec<T> = Vec::new();
    let mut depths: HashMap<T, u32> = HashMap::new();
    let mut frontier = Frontier::new(params.order);

    frontier.push(start.clone(), 0);

    while let Some((current, depth)) = frontier.pop() {
        if visited_order.len() >= params.max_results {
            break;
        }
        let first_visit = match depths.get(&current) {
            None => true,
            Some(&best) if bounded && depth < best => false,
            Some(_) => continue,
        };
        log::trace!(
            "{} {:?} at depth {}",
            if first_visit { "visit" } else { "revisit" },
            current,
            depth
        );

        if depth < params.max_depth {
            for neighbor in graph.neighbors(&current) {
                frontier.push(neighbor.clone(), depth + 1);
            }
        }
        depths.insert(current.clone(), depth);
        if first_visit {
            visited_order.push(current);
        }
    }

    log::debug!(
        "{:?} traversal from {:?} visited {} of {} nodes",
        params.order,
        start,
        visited_order.len(),
        graph.node_count()
    );

    TraversalResult {
        visited: visited_order,
        depths,
    }
}

/// Breadth-first traversal from `start`.
///
/// Every node reachable from `start` appears exactly once, in non-decreasing
/// distance order. A start label that was never linked yields `[start]`.
pub fn bfs<T: Label>(graph: &Graph<T>, start: &T) -> Vec<T> {
    walk(graph, start, &TraversalParams::breadth_first()).visited
}

/// Depth-first traversal from `start`, using an explicit stack.
///
/// Neighbors are pushed in adjacency order, so the last-linked neighbor of a
/// node is explored first.
pub fn dfs<T: Label>(graph: &Graph<T>, start: &T) -> Vec<T> {
    walk(graph, start, &TraversalParams::depth_first()).visited
}

/// Checked traversal with depth and result limits.
pub fn traverse<T: Label>(
    graph: &Graph<T>,
    start: &T,
    params: &TraversalParams,
) -> GraphResult<TraversalResult<T>> {
    if !graph.contains_node(start) {
        return Err(GraphError::node_not_found(start));
    }
    Ok(walk(graph, start, params))
}

/// Breadth-first traversal grouped by distance from `start`.
///
/// Layer `i` holds the nodes exactly `i` hops away, in discovery order.
pub fn bfs_layers<T: Label>(graph: &Graph<T>, start: &T) -> Vec<Vec<T>> {
    let mut layers: Vec<Vec<T>> = Vec::new();
    let mut seen: HashSet<T> = HashSet::new();
    let mut current = vec![start.clone()];
    seen.insert(start.clone());

    while !current.is_empty() {
        let mut next = Vec::new();
        for label in &current {
            for neighbor in graph.neighbors(label) {
                if seen.insert(neighbor.clone()) {
                    next.push(neighbor.clone());
                }
            }
        }
        layers.push(current);
        current = next;
    }

    layers
}

/// Fewest-edge path from `from` to `to`, both ends included.
///
/// Returns `Ok(None)` when `to` is not reachable from `from`.
pub fn shortest_path<T: Label>(graph: &Graph<T>, from: &T, to: &T) -> GraphResult<Option<Vec<T>>> {
    if !graph.contains_node(from) {
        return Err(GraphError::node_not_found(from));
    }
    if !graph.contains_node(to) {
        return Err(GraphError::node_not_found(to));
    }

    let mut parents: HashMap<T, T> = HashMap::new();
    let mut seen: HashSet<T> = HashSet::new();
    let mut queue: VecDeque<T> = VecDeque::new();

    seen.insert(from.clone());
    queue.push_back(from.clone());

    while let Some(current) = queue.pop_front() {
        if current == *to {
            let mut path = vec![current];
            while let Some(parent) = path.last().and_then(|label| parents.get(label)) {
                path.push(parent.clone());
            }
            path.reverse();
            return Ok(Some(path));
        }
        for neighbor in graph.neighbors(&current) {
            if seen.insert(neighbor.clone()) {
                parents.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor.clone());
            }
        }
    }

    Ok(None)
}
