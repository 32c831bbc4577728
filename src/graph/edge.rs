//! Edge entity: an identified relation between two node ids
//!
//! An edge holds endpoint identifiers only, never a reference to a node.
//! Endpoints are not checked for existence until the edge is added to a
//! graph.

use super::ident::{IdGenerator, UuidIds};
use super::types::{EdgeId, NodeId};
use super::value::{merge_attrs, AttrMap, AttrValue};
use serde::{Deserialize, Serialize};

/// A directed-by-default relation between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Id of the node this edge goes FROM
    pub source: NodeId,

    /// Id of the node this edge goes TO
    pub target: NodeId,

    /// Kind of relation (e.g. "depends_on", "knows")
    #[serde(rename = "type")]
    pub edge_type: String,

    /// Attributes associated with this edge
    #[serde(default)]
    pub data: AttrMap,

    /// Annotations about this edge
    #[serde(default)]
    pub metadata: AttrMap,
}

impl Edge {
    /// Create an edge with an auto-generated id
    ///
    /// `source` and `target` accept a bare id, anything convertible to one,
    /// or `&Node` (only the id is extracted).
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        edge_type: impl Into<String>,
    ) -> Self {
        Edge::with_id(UuidIds.next_edge_id(), source, target, edge_type)
    }

    /// Create an edge with an explicit id
    pub fn with_id(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        edge_type: impl Into<String>,
    ) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            edge_type: edge_type.into(),
            data: AttrMap::new(),
            metadata: AttrMap::new(),
        }
    }

    /// Replace the data bag (builder style)
    pub fn with_data(mut self, data: AttrMap) -> Self {
        self.data = data;
        self
    }

    /// Replace the metadata bag (builder style)
    pub fn with_metadata(mut self, metadata: AttrMap) -> Self {
        self.metadata = metadata;
        self
    }

    /// Shallow-merge `data` into the edge's data bag
    pub fn update_data(&mut self, data: AttrMap) -> &mut Self {
        merge_attrs(&mut self.data, data);
        self
    }

    /// Shallow-merge `metadata` into the edge's metadata bag
    pub fn update_metadata(&mut self, metadata: AttrMap) -> &mut Self {
        merge_attrs(&mut self.metadata, metadata);
        self
    }

    /// Set a single data attribute
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.data.insert(key.into(), value.into())
    }

    /// Get a single data attribute
    pub fn get_attr(&self, key: &str) -> Option<&AttrValue> {
        self.data.get(key)
    }

    /// Check if this edge connects two specific nodes, in either direction
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, node: &NodeId) -> bool {
        &self.source == node
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: &NodeId) -> bool {
        &self.target == node
    }

    /// The endpoint that is not `node`, or `None` if `node` is not an
    /// endpoint. For a self-loop both endpoints are `node`, so `node` is
    /// returned.
    pub fn other_endpoint(&self, node: &NodeId) -> Option<&NodeId> {
        if &self.source == node {
            Some(&self.target)
        } else if &self.target == node {
            Some(&self.source)
        } else {
            None
        }
    }
}
