//! Node entity: an identified vertex with free-form attribute bags

use super::ident::{IdGenerator, UuidIds};
use super::types::NodeId;
use super::value::{merge_attrs, AttrMap, AttrValue};
use serde::{Deserialize, Serialize};

/// A vertex in the graph
///
/// Identity is the `id`; uniqueness is enforced by the owning
/// [`Graph`](super::Graph), not by the node itself. `data` and `metadata`
/// are free-form insertion-ordered bags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Kind of node (e.g. "task", "person")
    #[serde(rename = "type")]
    pub node_type: String,

    /// Attributes associated with this node
    #[serde(default)]
    pub data: AttrMap,

    /// Annotations about this node
    #[serde(default)]
    pub metadata: AttrMap,
}

impl Node {
    /// Create a node with an auto-generated id and empty bags
    pub fn new(node_type: impl Into<String>) -> Self {
        Node::with_id(UuidIds.next_node_id(), node_type)
    }

    /// Create a node with an explicit id
    pub fn with_id(id: impl Into<NodeId>, node_type: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            node_type: node_type.into(),
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

    /// Shallow-merge `data` into the node's data bag
    ///
    /// Returns `&mut self` for chaining.
    pub fn update_data(&mut self, data: AttrMap) -> &mut Self {
        merge_attrs(&mut self.data, data);
        self
    }

    /// Shallow-merge `metadata` into the node's metadata bag
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
}

impl From<&Node> for NodeId {
    fn from(node: &Node) -> Self {
        node.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_node() {
        let node = Node::with_id("alice", "person");
        assert_eq!(node.id, NodeId::new("alice"));
        assert_eq!(node.node_type, "person");
        assert!(node.data.is_empty());
        assert!(node.metadata.is_empty());
    }

    #[test]
    fn test_auto_generated_id() {
        let a = Node::new("person");
        let b = Node::new("person");
        assert_ne!(a.id, b.id);
        assert!(a.id.as_str().starts_with("node-"));
    }

    #[test]
    fn test_update_data_shallow_merge() {
        let mut node = Node::with_id("n1", "task");
        node.set_attr("status", "open");
        node.set_attr("priority", 1i64);

        let mut updates = AttrMap::new();
        updates.insert("status".to_string(), "done".into());
        updates.insert("owner".to_string(), "alice".into());
        node.update_data(updates);

        assert_eq!(node.get_attr("status").unwrap().as_str(), Some("done"));
        assert_eq!(node.get_attr("priority").unwrap().as_integer(), Some(1));
        assert_eq!(node.get_attr("owner").unwrap().as_str(), Some("alice"));
    }

    #[test]
    fn test_update_chaining() {
        let mut node = Node::with_id("n1", "task");
        let mut data = AttrMap::new();
        data.insert("a".to_string(), 1i64.into());
        let mut meta = AttrMap::new();
        meta.insert("source".to_string(), "import".into());

        node.update_data(data).update_metadata(meta);

        assert_eq!(node.data.len(), 1);
        assert_eq!(node.metadata.get("source").unwrap().as_str(), Some("import"));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut node = Node::with_id("n1", "person");
        node.set_attr("name", "Alice");
        node.set_attr("age", 30i64);
        node.update_metadata({
            let mut m = AttrMap::new();
            m.insert("created_by".to_string(), "test".into());
            m
        });

        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_deserialize_without_bags() {
        // data and metadata default to empty when absent
        let node: Node = serde_json::from_str(r#"{"id":"n1","type":"person"}"#).unwrap();
        assert_eq!(node.id, NodeId::new("n1"));
        assert!(node.data.is_empty());
        assert!(node.metadata.is_empty());
    }

    #[test]
    fn test_node_id_extraction() {
        let node = Node::with_id("n1", "person");
        let id: NodeId = (&node).into();
        assert_eq!(id, node.id);
    }
}
