//! Graph algorithms
//!
//! Stateless functions over the graph's public read contract; none of them
//! mutate the graph, and none assume concurrent mutation during a run.

pub mod cycles;
pub mod pathfinding;
pub mod traversal;

pub use cycles::find_cycles;
pub use pathfinding::find_path;
pub use traversal::{traverse_graph, traverse_graph_with, Flow};
