//! Breadth-first traversal

use crate::graph::{Graph, Node, NodeId};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Visitor verdict for [`traverse_graph_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep traversing
    Continue,
    /// Terminate immediately; the remaining frontier is discarded
    Stop,
}

/// Breadth-first traversal from `start`, returning visited ids in order
///
/// A missing start id yields an empty sequence, not an error.
pub fn traverse_graph(graph: &Graph, start: &NodeId) -> Vec<NodeId> {
    traverse_graph_with(graph, start, |_| Flow::Continue)
}

/// Breadth-first traversal invoking `visit` on each dequeued node
///
/// Returning [`Flow::Stop`] terminates the traversal; the returned
/// sequence covers everything visited up to and including that node.
/// Nodes are marked visited at enqueue time, so no node is enqueued twice.
pub fn traverse_graph_with(
    graph: &Graph,
    start: &NodeId,
    mut visit: impl FnMut(&Node) -> Flow,
) -> Vec<NodeId> {
    if !graph.has_node(start) {
        return Vec::new();
    }

    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start.clone());
    frontier.push_back(start.clone());

    while let Some(current) = frontier.pop_front() {
        order.push(current.clone());

        if let Some(node) = graph.get_node(&current) {
            if visit(node) == Flow::Stop {
                break;
            }
        }

        for neighbor in graph.get_connected_nodes(&current) {
            if visited.insert(neighbor.id.clone()) {
                frontier.push_back(neighbor.id.clone());
            }
        }
    }

    order
}
