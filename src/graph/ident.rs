//! Identifier generation for nodes and edges
//!
//! Entity constructors fall back to [`UuidIds`] when no id is supplied.
//! The contract is uniqueness across the graph's lifetime, not any
//! particular encoding; [`SequentialIds`] gives deterministic ids for tests
//! and fixtures.

use super::types::{EdgeId, NodeId};
use uuid::Uuid;

/// Source of fresh node and edge identifiers
pub trait IdGenerator {
    fn next_node_id(&mut self) -> NodeId;
    fn next_edge_id(&mut self) -> EdgeId;
}

/// Random UUID v4 identifiers, the default
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_node_id(&mut self) -> NodeId {
        NodeId::new(format!("node-{}", Uuid::new_v4()))
    }

    fn next_edge_id(&mut self) -> EdgeId {
        EdgeId::new(format!("edge-{}", Uuid::new_v4()))
    }
}

/// Monotonic counter identifiers for deterministic tests
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next_node: u64,
    next_edge: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_node_id(&mut self) -> NodeId {
        self.next_node += 1;
        NodeId::new(format!("node-{}", self.next_node))
    }

    fn next_edge_id(&mut self) -> EdgeId {
        self.next_edge += 1;
        EdgeId::new(format!("edge-{}", self.next_edge))
    }
}
