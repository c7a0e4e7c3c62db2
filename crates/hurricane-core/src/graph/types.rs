//! Node and position types for the spiral graph.
//!
//! Nodes live in an arena owned by [`NodeArena`](super::NodeArena); edges are
//! stored as [`NodeId`] handles into that arena rather than as references, so
//! the structure has no ownership cycles and snapshots are plain clones.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use smallvec::SmallVec;

/// Inline capacity of a node's adjacency list.
///
/// Chain and tree linking give non-center nodes at most three neighbours.
pub(crate) const INLINE_NEIGHBORS: usize = 4;

/// Adjacency list storage.
pub(crate) type Neighbors = SmallVec<[NodeId; INLINE_NEIGHBORS]>;

/// Stable handle to a node in the arena.
///
/// The wrapped value is the node's insertion index, so handles are dense,
/// start at zero with the center and never change once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Handle of the center node.
    pub const CENTER: NodeId = NodeId(0);

    /// Creates a handle from an insertion index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the insertion index this handle refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Polar/height coordinates produced by a spiral function.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SpiralPosition {
    /// Radius.
    pub r: f64,
    /// Rotation angle in radians.
    pub theta: f64,
    /// Height along the spiral axis.
    pub z: f64,
}

impl SpiralPosition {
    /// The origin, where the center node sits.
    pub const ORIGIN: SpiralPosition = SpiralPosition {
        r: 0.0,
        theta: 0.0,
        z: 0.0,
    };

    /// Creates a position from its polar/height components.
    #[must_use]
    pub const fn new(r: f64, theta: f64, z: f64) -> Self {
        Self { r, theta, z }
    }

    /// Projects the polar part onto the plane: `(r·cos θ, r·sin θ)`.
    #[must_use]
    pub fn cartesian(&self) -> (f64, f64) {
        (self.r * self.theta.cos(), self.r * self.theta.sin())
    }
}

/// A node of the spiral graph.
///
/// Everything but the adjacency list is fixed at insertion time. Values
/// handed out by [`HurricaneGraph`](super::HurricaneGraph) are snapshots:
/// their adjacency reflects the graph at the moment they were read.
///
/// # Example
///
/// ```rust
/// use hurricane_core::graph::{HurricaneGraph, LinearSpiral, NodeId};
///
/// let graph = HurricaneGraph::new("c", "center", LinearSpiral::new(1.0, 0.0, 0.0), None);
/// let node = graph.insert("n1", "first").unwrap();
///
/// assert_eq!(node.id(), "n1");
/// assert_eq!(node.handle(), NodeId::new(1));
/// assert_eq!(node.r(), 1.0);
/// assert_eq!(node.x(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    handle: NodeId,
    id: Arc<str>,
    data: Arc<str>,
    r: f64,
    theta: f64,
    z: f64,
    x: f64,
    y: f64,
    adjacent: Neighbors,
}

impl Node {
    pub(crate) fn new(handle: NodeId, id: Arc<str>, data: Arc<str>, pos: SpiralPosition) -> Self {
        let (x, y) = pos.cartesian();
        Self {
            handle,
            id,
            data,
            r: pos.r,
            theta: pos.theta,
            z: pos.z,
            x,
            y,
            adjacent: Neighbors::new(),
        }
    }

    /// Returns the arena handle of this node.
    #[must_use]
    pub fn handle(&self) -> NodeId {
        self.handle
    }

    /// Returns the node identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the caller-supplied payload.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns the radius.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Returns the rotation angle in radians.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns the height.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Returns the Cartesian X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Cartesian Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the polar/height position.
    #[must_use]
    pub fn position(&self) -> SpiralPosition {
        SpiralPosition::new(self.r, self.theta, self.z)
    }

    /// Returns neighbour handles in the order the edges were created.
    #[must_use]
    pub fn adjacent(&self) -> &[NodeId] {
        &self.adjacent
    }

    /// Returns the number of incident edges.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    pub(crate) fn id_arc(&self) -> &Arc<str> {
        &self.id
    }

    pub(crate) fn push_neighbor(&mut self, other: NodeId) {
        self.adjacent.push(other);
    }
}
