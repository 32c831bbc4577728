//! Depth-first cycle detection

use crate::graph::{Graph, NodeId};
use rustc_hash::FxHashSet;

/// Find cycles by depth-first search from every unvisited node
///
/// Traversal follows edges in their declared direction (see
/// [`Graph::get_outgoing_nodes`]); undirected graphs therefore report
/// every 2-cycle as well as longer ones. When a neighbor already on the
/// current path is encountered, the slice of that path from the neighbor's
/// first occurrence to the current node is recorded.
///
/// The same cycle may be recorded more than once when several paths lead
/// into an already-stacked node. That duplication is kept as-is;
/// deduplication is a policy decision left to callers.
pub fn find_cycles(graph: &Graph) -> Vec<Vec<NodeId>> {
    let mut cycles = Vec::new();
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut on_stack: FxHashSet<NodeId> = FxHashSet::default();
    let mut path: Vec<NodeId> = Vec::new();

    for node in graph.get_nodes() {
        if !visited.contains(&node.id) {
            walk(graph, &node.id, &mut path, &mut visited, &mut on_stack, &mut cycles);
        }
    }

    cycles
}

/// One entry per node on the current depth-first path
struct Frame {
    id: NodeId,
    neighbors: Vec<NodeId>,
    next: usize,
}

fn outgoing_ids(graph: &Graph, id: &NodeId) -> Vec<NodeId> {
    graph
        .get_outgoing_nodes(id)
        .iter()
        .map(|node| node.id.clone())
        .collect()
}

/// Depth-first walk from `root` with an explicit frame stack, so search
/// depth is bounded by heap rather than the call stack. Nodes are entered
/// in the same order the equivalent recursion would enter them.
fn walk(
    graph: &Graph,
    root: &NodeId,
    path: &mut Vec<NodeId>,
    visited: &mut FxHashSet<NodeId>,
    on_stack: &mut FxHashSet<NodeId>,
    cycles: &mut Vec<Vec<NodeId>>,
) {
    visited.insert(root.clone());
    on_stack.insert(root.clone());
    path.push(root.clone());
    let mut stack = vec![Frame {
        id: root.clone(),
        neighbors: outgoing_ids(graph, root),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next < frame.neighbors.len() {
            let neighbor = frame.neighbors[frame.next].clone();
            frame.next += 1;

            if !visited.contains(&neighbor) {
                visited.insert(neighbor.clone());
                on_stack.insert(neighbor.clone());
                path.push(neighbor.clone());
                let neighbors = outgoing_ids(graph, &neighbor);
                stack.push(Frame {
                    id: neighbor,
                    neighbors,
                    next: 0,
                });
            } else if on_stack.contains(&neighbor) {
                // Back edge into the current path closes a cycle
                if let Some(start) = path.iter().position(|id| id == &neighbor) {
                    cycles.push(path[start..].to_vec());
                }
            }
        } else {
            on_stack.remove(&frame.id);
            path.pop();
            stack.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, GraphOptions, Node};

    fn ids(cycle: &[NodeId]) -> Vec<&str> {
        cycle.iter().map(|id| id.as_str()).collect()
    }

    fn graph_with(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut graph = Graph::new();
        for id in nodes {
            graph.add_node(Node::with_id(*id, "test")).unwrap();
        }
        for (source, target) in edges {
            graph.add_edge(Edge::new(*source, *target, "link")).unwrap();
        }
        graph
    }

    #[test]
    fn test_acyclic_chain() {
        let graph = graph_with(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert!(find_cycles(&graph).is_empty());
    }

    #[test]
    fn test_simple_cycle() {
        let graph = graph_with(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        let cycles = find_cycles(&graph);
        assert_eq!(cycles.len(), 1);
        assert_eq!(ids(&cycles[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_self_loop() {
        let graph = graph_with(&["a"], &[("a", "a")]);
        let cycles = find_cycles(&graph);
        assert_eq!(cycles.len(), 1);
        assert_eq!(ids(&cycles[0]), vec!["a"]);
    }

    #[test]
    fn test_cycle_in_disconnected_component() {
        let graph = graph_with(
            &["a", "b", "x", "y"],
            &[("a", "b"), ("x", "y"), ("y", "x")],
        );
        let cycles = find_cycles(&graph);
        assert_eq!(cycles.len(), 1);
        assert_eq!(ids(&cycles[0]), vec!["x", "y"]);
    }

    #[test]
    fn test_undirected_edge_is_a_two_cycle() {
        let mut graph = Graph::with_options(GraphOptions::undirected());
        graph.add_node(Node::with_id("a", "test")).unwrap();
        graph.add_node(Node::with_id("b", "test")).unwrap();
        graph.add_edge(Edge::new("a", "b", "link")).unwrap();

        let cycles = find_cycles(&graph);
        assert_eq!(cycles.len(), 1);
        assert_eq!(ids(&cycles[0]), vec!["a", "b"]);
    }

    #[test]
    fn test_deep_chain_with_back_edge() {
        // Depth is limited by heap, not the call stack
        let n = 50_000;
        let mut graph = Graph::new();
        for i in 0..n {
            graph
                .add_node(Node::with_id(format!("n{}", i), "test"))
                .unwrap();
        }
        for i in 0..n - 1 {
            graph
                .add_edge(Edge::new(format!("n{}", i), format!("n{}", i + 1), "link"))
                .unwrap();
        }
        graph
            .add_edge(Edge::new(format!("n{}", n - 1), "n0", "link"))
            .unwrap();

        let cycles = find_cycles(&graph);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), n);
        assert_eq!(cycles[0][0].as_str(), "n0");
    }

    #[test]
    fn test_duplicate_discovery_kept() {
        // Two paths into the same cycle: a -> b -> a and a -> c -> a.
        // Each back edge into the stacked "a" records its own cycle.
        let graph = graph_with(
            &["a", "b", "c"],
            &[("a", "b"), ("b", "a"), ("a", "c"), ("c", "a")],
        );
        let cycles = find_cycles(&graph);
        assert_eq!(cycles.len(), 2);
        assert_eq!(ids(&cycles[0]), vec!["a", "b"]);
        assert_eq!(ids(&cycles[1]), vec!["a", "c"]);
    }
}
