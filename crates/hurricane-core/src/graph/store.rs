//! Thread-safe spiral graph store.
//!
//! The whole node arena sits behind one reader-writer lock. Insertion holds
//! the write lock from the duplicate check through strategy linking, so an
//! insert and its edges appear atomically. Every query holds the read lock
//! for its full duration and sees a consistent snapshot; long traversals
//! block writers until they finish.

use parking_lot::RwLock;

use crate::config::HurricaneConfig;
use crate::error::{Error, Result};

use super::adjacency::AdjacencyStrategy;
use super::arena::NodeArena;
use super::spiral::SpiralFunction;
use super::traversal;
use super::types::{Node, NodeId};

/// In-memory graph whose nodes are placed along a spiral.
///
/// # Example
///
/// ```rust
/// use hurricane_core::graph::{ChainAdjacency, HurricaneGraph, LinearSpiral, NodeId};
///
/// let graph = HurricaneGraph::new(
///     "c",
///     "center",
///     LinearSpiral::new(1.0, 0.0, 0.0),
///     Some(Box::new(ChainAdjacency)),
/// );
/// graph.insert("n1", "one").unwrap();
/// graph.insert("n2", "two").unwrap();
///
/// let ids: Vec<_> = graph.bfs(NodeId::CENTER).iter().map(|n| n.id().to_string()).collect();
/// assert_eq!(ids, ["c", "n1", "n2"]);
/// ```
pub struct HurricaneGraph {
    arena: RwLock<NodeArena>,
    spiral: Box<dyn SpiralFunction>,
    adjacency: Option<Box<dyn AdjacencyStrategy>>,
}

impl HurricaneGraph {
    /// Creates a graph holding only the center node at the origin.
    ///
    /// With `adjacency` set to `None`, inserted nodes get no edges.
    pub fn new<S>(
        center_id: &str,
        center_data: &str,
        spiral: S,
        adjacency: Option<Box<dyn AdjacencyStrategy>>,
    ) -> Self
    where
        S: SpiralFunction + 'static,
    {
        Self::from_parts(center_id, center_data, Box::new(spiral), adjacency)
    }

    /// Builds a graph from declarative configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: &HurricaneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            &config.center.id,
            &config.center.data,
            config.spiral.build(),
            config.adjacency.build(),
        ))
    }

    /// Creates a graph from already boxed strategies.
    pub fn from_parts(
        center_id: &str,
        center_data: &str,
        spiral: Box<dyn SpiralFunction>,
        adjacency: Option<Box<dyn AdjacencyStrategy>>,
    ) -> Self {
        tracing::info!(
            center = center_id,
            spiral = spiral.name(),
            adjacency = adjacency.as_deref().map_or("none", |a| a.name()),
            "Spiral graph created"
        );
        Self {
            arena: RwLock::new(NodeArena::with_center(center_id, center_data)),
            spiral,
            adjacency,
        }
    }

    /// Inserts a node and links it according to the configured strategy.
    ///
    /// The node's position comes from the spiral function applied to its
    /// insertion index. The returned snapshot includes the edges the strategy
    /// just created.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateIdentifier` if `id` is already present; the
    /// graph is left untouched.
    pub fn insert(&self, id: &str, data: &str) -> Result<Node> {
        let mut arena = self.arena.write();

        if arena.contains(id) {
            tracing::debug!(id, "Rejected duplicate node");
            return Err(Error::DuplicateIdentifier(id.to_string()));
        }

        let index = arena.len();
        let position = self.spiral.position(index);
        let handle = arena.push(id, data, position);

        if let Some(strategy) = &self.adjacency {
            strategy.link(&mut *arena, handle);
        }

        tracing::debug!(
            id,
            index,
            r = position.r,
            theta = position.theta,
            z = position.z,
            "Node inserted"
        );

        Ok(arena.nodes()[handle.index()].clone())
    }

    /// Returns a snapshot of the node with this identifier.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<Node> {
        let arena = self.arena.read();
        arena.handle_of(id).and_then(|h| arena.get(h)).cloned()
    }

    /// Returns a snapshot of the node behind a handle.
    #[must_use]
    pub fn get(&self, handle: NodeId) -> Option<Node> {
        self.arena.read().get(handle).cloned()
    }

    /// Returns a snapshot of the center node.
    #[must_use]
    pub fn center(&self) -> Node {
        let arena = self.arena.read();
        arena.nodes()[arena.center().index()].clone()
    }

    /// Returns snapshots of every node in insertion order.
    ///
    /// The copy is independent of the graph and can be iterated without
    /// holding any lock.
    #[must_use]
    pub fn all_nodes(&self) -> Vec<Node> {
        self.arena.read().nodes().to_vec()
    }

    /// Returns the number of nodes, center included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.read().len()
    }

    /// Always false: the center is present from construction on.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arena.read().is_empty()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.arena.read().edge_count()
    }

    /// Returns snapshots of a node's neighbours in adjacency order.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Option<Vec<Node>> {
        let arena = self.arena.read();
        let node = arena.get(arena.handle_of(id)?)?;
        Some(arena.snapshot(node.adjacent()))
    }

    /// Returns all nodes sorted by radius, then angle.
    #[must_use]
    pub fn spiral_order(&self) -> Vec<Node> {
        let arena = self.arena.read();
        traversal::spiral_order(arena.nodes())
    }

    /// Returns nodes grouped into height layers of thickness `layer_size`.
    ///
    /// See [`traversal::layers`] for the bucketing rules. `layer_size` must be
    /// positive.
    #[must_use]
    pub fn layers(&self, layer_size: f64) -> Vec<Vec<Node>> {
        let arena = self.arena.read();
        traversal::layers(arena.nodes(), layer_size)
    }

    /// Breadth-first walk from `start`; empty if `start` is unknown.
    #[must_use]
    pub fn bfs(&self, start: NodeId) -> Vec<Node> {
        let arena = self.arena.read();
        let order = traversal::bfs(&*arena, start);
        arena.snapshot(&order)
    }

    /// Depth-first walk from `start`; empty if `start` is unknown.
    #[must_use]
    pub fn dfs(&self, start: NodeId) -> Vec<Node> {
        let arena = self.arena.read();
        let order = traversal::dfs(&*arena, start);
        arena.snapshot(&order)
    }
}

impl std::fmt::Debug for HurricaneGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HurricaneGraph")
            .field("spiral", &self.spiral.name())
            .field(
                "adjacency",
                &self.adjacency.as_deref().map_or("none", |a| a.name()),
            )
            .field("nodes", &self.len())
            .finish()
    }
}

// Compile-time check: HurricaneGraph must be Send + Sync
#[allow(dead_code)]
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HurricaneGraph>();
};
