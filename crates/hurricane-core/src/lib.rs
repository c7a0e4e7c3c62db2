//! # Hurricane Core
//!
//! A concurrent in-memory graph whose nodes are laid out along a parametric
//! spiral.
//!
//! Each inserted node receives a position `(r, θ, z)` computed from its
//! insertion index by a [`SpiralFunction`](graph::SpiralFunction), plus the
//! Cartesian projection `(x, y)`. A pluggable
//! [`AdjacencyStrategy`](graph::AdjacencyStrategy) then decides which existing
//! nodes it links to. The graph answers lookups and four read-only queries:
//! spiral order, height layers, breadth-first and depth-first walks.
//!
//! ## Quick Start
//!
//! ```rust
//! use hurricane_core::{HurricaneConfig, HurricaneGraph, NodeId};
//!
//! fn main() -> Result<(), hurricane_core::Error> {
//!     let graph = HurricaneGraph::with_config(&HurricaneConfig::default())?;
//!
//!     for i in 1..=10 {
//!         graph.insert(&format!("n{i}"), &format!("node {i}"))?;
//!     }
//!
//!     let by_radius = graph.spiral_order();
//!     let layers = graph.layers(0.2);
//!     let bfs = graph.bfs(NodeId::CENTER);
//!
//!     assert_eq!(by_radius.len(), 11);
//!     assert_eq!(bfs.len(), 11);
//!     assert!(!layers.is_empty());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::cast_precision_loss,
        clippy::uninlined_format_args
    )
)]

pub mod config;
pub mod error;
pub mod graph;

pub use config::{AdjacencyKind, CenterConfig, HurricaneConfig, SpiralConfig};
pub use error::{Error, Result};
pub use graph::{HurricaneGraph, Node, NodeId, SpiralPosition};
