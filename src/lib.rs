//! Mutagraph
//!
//! An in-memory, mutable, event-observable graph: nodes and edges keyed by
//! string identifier, adjacency tracked per node, with breadth-first
//! traversal, shortest-path search and cycle detection on top.
//!
//! The core is single-threaded and fully synchronous. Mutations validate
//! referential integrity (no edge may reference a missing node), enforce
//! strict-mode and multigraph rules, and emit lifecycle events after each
//! committed change. The whole graph round-trips through a plain
//! serialized object, so storage adapters, event queues and other
//! collaborators can compose around it without touching the core.
//!
//! # Example
//!
//! ```rust
//! use mutagraph::{Edge, Graph, Node};
//! use mutagraph::algo::{find_path, traverse_graph};
//!
//! let mut graph = Graph::new();
//! graph.add_node(Node::with_id("a", "task")).unwrap();
//! graph.add_node(Node::with_id("b", "task")).unwrap();
//! graph.add_node(Node::with_id("c", "task")).unwrap();
//! graph.add_edge(Edge::new("a", "b", "depends_on")).unwrap();
//! graph.add_edge(Edge::new("b", "c", "depends_on")).unwrap();
//!
//! let order = traverse_graph(&graph, &"a".into());
//! assert_eq!(order.len(), 3);
//!
//! let path = find_path(&graph, &"a".into(), &"c".into()).unwrap();
//! assert_eq!(path, vec!["a".into(), "b".into(), "c".into()]);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AttrMap, AttrValue, Edge, EdgeId, EventPayload, Graph, GraphError, GraphEvent, GraphEventKind,
    GraphObject, GraphOptions, GraphResult, Listener, ListenerId, Node, NodeId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
