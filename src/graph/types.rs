//! Core identifier and configuration types for the graph

use super::value::AttrMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

/// Unique identifier for an edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        EdgeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EdgeId {
    fn from(id: String) -> Self {
        EdgeId(id)
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        EdgeId(id.to_string())
    }
}

/// Construction options for a [`Graph`](super::Graph)
///
/// - `directed`: edges are one-directional for adjacency, neighbor and
///   path semantics (default `true`)
/// - `multigraph`: permit more than one edge between the same pair
///   (default `false`)
/// - `strict`: reject id collisions on add instead of overwriting
///   (default `false`)
/// - `metadata`: opaque graph-level annotation, not interpreted here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphOptions {
    #[serde(default = "default_directed")]
    pub directed: bool,

    #[serde(default)]
    pub multigraph: bool,

    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub metadata: AttrMap,
}

fn default_directed() -> bool {
    true
}

impl Default for GraphOptions {
    fn default() -> Self {
        GraphOptions {
            directed: true,
            multigraph: false,
            strict: false,
            metadata: AttrMap::new(),
        }
    }
}

impl GraphOptions {
    /// Options for an undirected graph, other fields at their defaults
    pub fn undirected() -> Self {
        GraphOptions {
            directed: false,
            ..Default::default()
        }
    }
}
