//! In-memory spiral graph.
//!
//! Nodes are placed along a spiral by a pluggable [`SpiralFunction`] and
//! wired together by a pluggable [`AdjacencyStrategy`]. The store is safe to
//! share across threads; traversals read a consistent snapshot.
//!
//! # Example
//!
//! ```rust
//! use hurricane_core::graph::{HurricaneGraph, LinearSpiral, NodeId, StarAdjacency};
//!
//! let graph = HurricaneGraph::new(
//!     "c",
//!     "center",
//!     LinearSpiral::new(1.0, 0.0, 0.0),
//!     Some(Box::new(StarAdjacency)),
//! );
//! graph.insert("n1", "one").unwrap();
//! graph.insert("n2", "two").unwrap();
//!
//! let hub = graph.center();
//! assert_eq!(hub.adjacent(), &[NodeId::new(1), NodeId::new(2)]);
//! assert_eq!(graph.dfs(NodeId::CENTER).len(), 3);
//! ```

mod adjacency;
mod arena;
mod spiral;
mod store;
pub mod traversal;
mod types;

#[cfg(test)]
mod traversal_tests;

pub use adjacency::{AdjacencyStrategy, ChainAdjacency, StarAdjacency, TreeAdjacency};
pub use arena::{connect_nodes, NodeArena};
pub use spiral::{ArchimedeanSpiral, LinearSpiral, LogarithmicSpiral, SpiralFunction};
pub use store::HurricaneGraph;
pub use traversal::GraphTraversal;
pub use types::{Node, NodeId, SpiralPosition};
