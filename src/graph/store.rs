//! The graph container: node/edge ownership, adjacency index, mutation
//! invariants, event emission and serialization
//!
//! Invariants maintained after every mutation:
//! - every edge's source and target reference a present node
//! - in strict mode, id collisions on add are rejected
//! - in non-multigraph mode, at most one edge per (ordered) pair
//! - the adjacency index holds exactly the incident edge ids per the
//!   directedness rule

use super::edge::Edge;
use super::event::{
    now_millis, EventPayload, GraphEvent, GraphEventKind, Listener, ListenerId, ListenerRegistry,
};
use super::node::Node;
use super::types::{EdgeId, GraphOptions, NodeId};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph mutation or deserialization
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node \"{0}\" already exists")]
    NodeAlreadyExists(NodeId),

    #[error("edge \"{0}\" already exists")]
    EdgeAlreadyExists(EdgeId),

    #[error("source node \"{0}\" does not exist")]
    MissingSource(NodeId),

    #[error("target node \"{0}\" does not exist")]
    MissingTarget(NodeId),

    #[error("an edge between \"{0}\" and \"{1}\" already exists")]
    DuplicateEdge(NodeId, NodeId),

    #[error("malformed graph object: {0}")]
    Malformed(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Serialized form of a graph: nodes first, then edges, then options
///
/// Import order matters: an edge whose endpoint is not yet present is the
/// same structural error as a live [`Graph::add_edge`] failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphObject {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub options: GraphOptions,
}

/// In-memory, mutable, event-observable graph
///
/// Owns its nodes and edges exclusively, keyed by id in insertion order,
/// with an adjacency index from node id to incident edge ids. All
/// operations are synchronous; concurrent mutation is out of contract.
#[derive(Debug)]
pub struct Graph {
    /// Node storage: id -> node
    nodes: IndexMap<NodeId, Node>,

    /// Edge storage: id -> edge
    edges: IndexMap<EdgeId, Edge>,

    /// Adjacency index: node id -> ids of edges leaving that node
    /// (and entering it too, when the graph is undirected)
    adjacency: IndexMap<NodeId, IndexSet<EdgeId>>,

    /// Construction options, fixed for the graph's lifetime
    options: GraphOptions,

    /// Per-instance event listeners
    listeners: ListenerRegistry,
}

impl Graph {
    /// Create an empty graph with default options (directed, non-strict,
    /// not a multigraph)
    pub fn new() -> Self {
        Graph::with_options(GraphOptions::default())
    }

    /// Create an empty graph with explicit options
    pub fn with_options(options: GraphOptions) -> Self {
        Graph {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            adjacency: IndexMap::new(),
            options,
            listeners: ListenerRegistry::new(),
        }
    }

    /// The graph's construction options
    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    // ============================================================
    // Mutation
    // ============================================================

    /// Add a node to the graph
    ///
    /// In strict mode an id collision is rejected and nothing changes.
    /// Otherwise a collision replaces the stored node but keeps its
    /// adjacency set, so incident edges stay indexed.
    pub fn add_node(&mut self, node: Node) -> GraphResult<&Node> {
        if self.options.strict && self.has_node(&node.id) {
            return Err(GraphError::NodeAlreadyExists(node.id));
        }

        let id = node.id.clone();
        debug!(node = %id, node_type = %node.node_type, "add node");

        self.nodes.insert(id.clone(), node.clone());
        self.adjacency.entry(id.clone()).or_default();

        self.emit(GraphEventKind::NodeAdded, EventPayload::Node(node));

        Ok(&self.nodes[&id])
    }

    /// Add an edge to the graph
    ///
    /// Both endpoints must already exist. Strict mode rejects id
    /// collisions; non-multigraph mode rejects a second edge between the
    /// same pair. Every rejection leaves the graph unmutated.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<&Edge> {
        if !self.has_node(&edge.source) {
            return Err(GraphError::MissingSource(edge.source));
        }
        if !self.has_node(&edge.target) {
            return Err(GraphError::MissingTarget(edge.target));
        }
        if self.options.strict && self.has_edge(&edge.id) {
            return Err(GraphError::EdgeAlreadyExists(edge.id));
        }
        if !self.options.multigraph && self.has_edge_between(&edge.source, &edge.target) {
            return Err(GraphError::DuplicateEdge(edge.source, edge.target));
        }

        let id = edge.id.clone();
        debug!(edge = %id, source = %edge.source, target = %edge.target, "add edge");

        if let Some(adjacent) = self.adjacency.get_mut(&edge.source) {
            adjacent.insert(id.clone());
        }
        if !self.options.directed {
            if let Some(adjacent) = self.adjacency.get_mut(&edge.target) {
                adjacent.insert(id.clone());
            }
        }
        self.edges.insert(id.clone(), edge.clone());

        self.emit(GraphEventKind::EdgeAdded, EventPayload::Edge(edge));

        Ok(&self.edges[&id])
    }

    /// Remove a node and every edge incident to it
    ///
    /// Each cascaded edge removal emits its own `edge_removed` event before
    /// the final `node_removed`. Returns `false` if the node was absent.
    pub fn remove_node(&mut self, id: &NodeId) -> bool {
        let Some(node) = self.nodes.get(id).cloned() else {
            return false;
        };

        let incident: Vec<EdgeId> = self
            .get_edges_for_node(id)
            .iter()
            .map(|edge| edge.id.clone())
            .collect();
        for edge_id in &incident {
            self.remove_edge(edge_id);
        }

        debug!(node = %id, pruned_edges = incident.len(), "remove node");
        self.nodes.shift_remove(id);
        self.adjacency.shift_remove(id);

        self.emit(GraphEventKind::NodeRemoved, EventPayload::Node(node));

        true
    }

    /// Remove an edge by id
    ///
    /// Returns `false` if the edge was absent.
    pub fn remove_edge(&mut self, id: &EdgeId) -> bool {
        let Some(edge) = self.edges.get(id).cloned() else {
            return false;
        };

        debug!(edge = %id, "remove edge");
        if let Some(adjacent) = self.adjacency.get_mut(&edge.source) {
            adjacent.shift_remove(id);
        }
        if !self.options.directed {
            if let Some(adjacent) = self.adjacency.get_mut(&edge.target) {
                adjacent.shift_remove(id);
            }
        }
        self.edges.shift_remove(id);

        self.emit(GraphEventKind::EdgeRemoved, EventPayload::Edge(edge));

        true
    }

    /// Remove all nodes and edges
    pub fn clear(&mut self) {
        debug!(nodes = self.nodes.len(), edges = self.edges.len(), "clear graph");
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();

        self.emit(GraphEventKind::GraphCleared, EventPayload::None);
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Get a node by id
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable node by id
    pub fn get_node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Get an edge by id
    pub fn get_edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Get a mutable edge by id
    pub fn get_edge_mut(&mut self, id: &EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Check if an edge exists
    pub fn has_edge(&self, id: &EdgeId) -> bool {
        self.edges.contains_key(id)
    }

    /// Check if an edge connects `source` to `target`
    ///
    /// In an undirected graph the reverse direction counts too.
    pub fn has_edge_between(&self, source: &NodeId, target: &NodeId) -> bool {
        if !self.has_node(source) || !self.has_node(target) {
            return false;
        }

        if let Some(edge_ids) = self.adjacency.get(source) {
            for edge_id in edge_ids {
                if let Some(edge) = self.edges.get(edge_id) {
                    if &edge.target == target {
                        return true;
                    }
                }
            }
        }

        if !self.options.directed {
            if let Some(edge_ids) = self.adjacency.get(target) {
                for edge_id in edge_ids {
                    if let Some(edge) = self.edges.get(edge_id) {
                        if &edge.target == source {
                            return true;
                        }
                    }
                }
            }
        }

        false
    }

    /// All nodes in insertion order
    pub fn get_nodes(&self) -> Vec<&Node> {
        self.nodes.values().collect()
    }

    /// All edges in insertion order
    pub fn get_edges(&self) -> Vec<&Edge> {
        self.edges.values().collect()
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every edge incident to a node: the adjacency-indexed edges plus,
    /// for directed graphs, a scan for incoming edges whose source is a
    /// different node. Empty for an unknown id.
    pub fn get_edges_for_node(&self, id: &NodeId) -> Vec<&Edge> {
        if !self.has_node(id) {
            return Vec::new();
        }

        let mut result = Vec::new();

        if let Some(edge_ids) = self.adjacency.get(id) {
            for edge_id in edge_ids {
                if let Some(edge) = self.edges.get(edge_id) {
                    result.push(edge);
                }
            }
        }

        if self.options.directed {
            for edge in self.edges.values() {
                if &edge.target == id && &edge.source != id {
                    result.push(edge);
                }
            }
        }

        result
    }

    /// Deduplicated neighbors of a node, derived from
    /// [`get_edges_for_node`](Graph::get_edges_for_node) by taking
    /// whichever endpoint is not `id`. Empty for an unknown id.
    pub fn get_connected_nodes(&self, id: &NodeId) -> Vec<&Node> {
        if !self.has_node(id) {
            return Vec::new();
        }

        let mut neighbor_ids: IndexSet<&NodeId> = IndexSet::new();
        for edge in self.get_edges_for_node(id) {
            let other = if &edge.source == id {
                &edge.target
            } else {
                &edge.source
            };
            neighbor_ids.insert(other);
        }

        neighbor_ids
            .into_iter()
            .filter_map(|neighbor_id| self.nodes.get(neighbor_id))
            .collect()
    }

    /// Neighbors reachable by following edges in their declared direction
    ///
    /// Derived from the adjacency index alone, with no incoming scan: for a
    /// directed graph these are the successors; for an undirected graph
    /// both endpoints index each edge, so edges are walkable from either
    /// side. Cycle detection is built on this view.
    pub fn get_outgoing_nodes(&self, id: &NodeId) -> Vec<&Node> {
        let Some(edge_ids) = self.adjacency.get(id) else {
            return Vec::new();
        };

        let mut neighbor_ids: IndexSet<&NodeId> = IndexSet::new();
        for edge_id in edge_ids {
            if let Some(edge) = self.edges.get(edge_id) {
                let other = if &edge.source == id {
                    &edge.target
                } else {
                    &edge.source
                };
                neighbor_ids.insert(other);
            }
        }

        neighbor_ids
            .into_iter()
            .filter_map(|neighbor_id| self.nodes.get(neighbor_id))
            .collect()
    }

    // ============================================================
    // Events
    // ============================================================

    /// Subscribe a listener to an event kind
    ///
    /// Returns a handle for [`off`](Graph::off). Listeners for the same
    /// kind are invoked in registration order.
    pub fn on(&mut self, kind: GraphEventKind, listener: Listener) -> ListenerId {
        self.listeners.on(kind, listener)
    }

    /// Unsubscribe a listener; returns `false` if it was not registered
    /// under that kind
    pub fn off(&mut self, kind: GraphEventKind, id: ListenerId) -> bool {
        self.listeners.off(kind, id)
    }

    fn emit(&self, kind: GraphEventKind, payload: EventPayload) {
        let event = GraphEvent {
            kind,
            payload,
            timestamp: now_millis(),
        };
        self.listeners.emit(&event);
    }

    // ============================================================
    // Serialization
    // ============================================================

    /// Serialize to a plain object: nodes, then edges, then options
    pub fn to_object(&self) -> GraphObject {
        GraphObject {
            nodes: self.nodes.values().cloned().collect(),
            edges: self.edges.values().cloned().collect(),
            options: self.options.clone(),
        }
    }

    /// Rebuild a graph from its serialized form
    ///
    /// Nodes are re-added first, then edges, re-validating every invariant;
    /// malformed input surfaces the same structural errors as live adds.
    pub fn from_object(object: GraphObject) -> GraphResult<Graph> {
        let mut graph = Graph::with_options(object.options);

        for node in object.nodes {
            graph.add_node(node)?;
        }
        for edge in object.edges {
            graph.add_edge(edge)?;
        }

        Ok(graph)
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> GraphResult<String> {
        serde_json::to_string(&self.to_object())
            .map_err(|err| GraphError::Malformed(err.to_string()))
    }

    /// Rebuild a graph from a JSON string
    pub fn from_json(json: &str) -> GraphResult<Graph> {
        let object: GraphObject =
            serde_json::from_str(json).map_err(|err| GraphError::Malformed(err.to_string()))?;
        Graph::from_object(object)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
