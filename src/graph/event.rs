//! Graph lifecycle events and the per-instance listener registry
//!
//! Events are delivered synchronously, strictly after the associated
//! mutation has been committed. Listeners for the same kind run in
//! registration order. Listeners receive `&GraphEvent` only, so a listener
//! cannot mutate the graph it is observing.

use super::edge::Edge;
use super::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of graph lifecycle event
///
/// `NodeUpdated` and `EdgeUpdated` are reserved; the current mutation set
/// does not emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphEventKind {
    NodeAdded,
    NodeRemoved,
    NodeUpdated,
    EdgeAdded,
    EdgeRemoved,
    EdgeUpdated,
    GraphCleared,
}

impl GraphEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphEventKind::NodeAdded => "node_added",
            GraphEventKind::NodeRemoved => "node_removed",
            GraphEventKind::NodeUpdated => "node_updated",
            GraphEventKind::EdgeAdded => "edge_added",
            GraphEventKind::EdgeRemoved => "edge_removed",
            GraphEventKind::EdgeUpdated => "edge_updated",
            GraphEventKind::GraphCleared => "graph_cleared",
        }
    }
}

impl fmt::Display for GraphEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The entity an event refers to; `None` for `graph_cleared`
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Node(Node),
    Edge(Edge),
    None,
}

impl EventPayload {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            EventPayload::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            EventPayload::Edge(edge) => Some(edge),
            _ => None,
        }
    }
}

/// A delivered graph event
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEvent {
    pub kind: GraphEventKind,
    pub payload: EventPayload,
    /// Unix milliseconds at emission time
    pub timestamp: i64,
}

/// Handle returned by [`Graph::on`](super::Graph::on), used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Event listener callback
pub type Listener = Box<dyn Fn(&GraphEvent)>;

/// Per-graph listener registry, keyed by event kind
///
/// Owned by each graph instance; holds nothing beyond memory, so no
/// teardown is required.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: Vec<(GraphEventKind, ListenerId, Listener)>,
    next_id: u64,
}

impl ListenerRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(&mut self, kind: GraphEventKind, listener: Listener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push((kind, id, listener));
        id
    }

    pub(crate) fn off(&mut self, kind: GraphEventKind, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(k, lid, _)| !(*k == kind && *lid == id));
        self.listeners.len() != before
    }

    pub(crate) fn emit(&self, event: &GraphEvent) {
        for (kind, _, listener) in &self.listeners {
            if *kind == event.kind {
                listener(event);
            }
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Current time in Unix milliseconds
pub(crate) fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
