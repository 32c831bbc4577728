//! Breadth-first shortest path by edge count

use crate::graph::{Graph, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Shortest path from `start` to `end` by edge count
///
/// Returns `None` when either endpoint is absent or no path exists; a
/// missing path is a result, not an error. `start == end` yields the
/// single-element path. Minimality is by edge count, not by weight.
pub fn find_path(graph: &Graph, start: &NodeId, end: &NodeId) -> Option<Vec<NodeId>> {
    if !graph.has_node(start) || !graph.has_node(end) {
        return None;
    }

    if start == end {
        return Some(vec![start.clone()]);
    }

    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    let mut previous: FxHashMap<NodeId, NodeId> = FxHashMap::default();

    visited.insert(start.clone());
    frontier.push_back(start.clone());

    while let Some(current) = frontier.pop_front() {
        if &current == end {
            // Walk predecessors back to the start, then reverse
            let mut path = vec![current.clone()];
            let mut cursor = &current;
            while let Some(parent) = previous.get(cursor) {
                path.push(parent.clone());
                cursor = parent;
            }
            path.reverse();
            return Some(path);
        }

        for neighbor in graph.get_connected_nodes(&current) {
            if visited.insert(neighbor.id.clone()) {
                previous.insert(neighbor.id.clone(), current.clone());
                frontier.push_back(neighbor.id.clone());
            }
        }
    }

    None
}
