//! Core graph implementation
//!
//! Implements the mutable, event-observable graph model:
//! - Nodes and edges keyed by string identifier, with free-form
//!   attribute/metadata bags
//! - An adjacency index per node for efficient neighbor lookup
//! - Referential integrity, strict-mode and multigraph invariants on
//!   every mutation
//! - Synchronous lifecycle events and full serialization round-trip

pub mod edge;
pub mod event;
pub mod ident;
pub mod node;
pub mod store;
pub mod types;
pub mod value;

// Re-export main types
pub use edge::Edge;
pub use event::{EventPayload, GraphEvent, GraphEventKind, Listener, ListenerId};
pub use ident::{IdGenerator, SequentialIds, UuidIds};
pub use node::Node;
pub use store::{Graph, GraphError, GraphObject, GraphResult};
pub use types::{EdgeId, GraphOptions, NodeId};
pub use value::{merge_attrs, AttrMap, AttrValue};
