//! Node arena: the state guarded by the graph lock.
//!
//! Nodes are kept in insertion order with an identifier index next to them.
//! The arena exposes no removal and only one way to create an edge,
//! [`connect_nodes`], which always writes both directions.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::types::{Node, NodeId, SpiralPosition};

/// Insertion-ordered node storage with O(1) lookup by identifier.
///
/// `nodes[0]` is always the center. `index` and `nodes` always describe the
/// same set of nodes.
#[derive(Debug)]
pub struct NodeArena {
    /// All nodes, indexed by their handle.
    nodes: Vec<Node>,
    /// Identifier -> handle.
    index: FxHashMap<Arc<str>, NodeId>,
}

impl NodeArena {
    /// Creates an arena holding only the center node, placed at the origin.
    pub(crate) fn with_center(id: &str, data: &str) -> Self {
        let center = Node::new(
            NodeId::CENTER,
            Arc::from(id),
            Arc::from(data),
            SpiralPosition::ORIGIN,
        );
        let mut index = FxHashMap::default();
        index.insert(Arc::clone(center.id_arc()), NodeId::CENTER);
        Self {
            nodes: vec![center],
            index,
        }
    }

    /// Returns the handle of the center node.
    #[must_use]
    pub fn center(&self) -> NodeId {
        NodeId::CENTER
    }

    /// Returns the number of nodes, center included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the center is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node behind a handle.
    #[must_use]
    pub fn get(&self, handle: NodeId) -> Option<&Node> {
        self.nodes.get(handle.index())
    }

    /// Resolves an identifier to its handle.
    #[must_use]
    pub fn handle_of(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// Returns true if a node with this identifier exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns all nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }

    /// Appends a node at the next insertion index.
    ///
    /// The caller has already checked that `id` is free.
    pub(crate) fn push(&mut self, id: &str, data: &str, position: SpiralPosition) -> NodeId {
        let handle = NodeId::new(self.nodes.len());
        let node = Node::new(handle, Arc::from(id), Arc::from(data), position);
        self.index.insert(Arc::clone(node.id_arc()), handle);
        self.nodes.push(node);
        handle
    }

    /// Clones the nodes behind a list of handles, in order.
    pub(crate) fn snapshot(&self, handles: &[NodeId]) -> Vec<Node> {
        handles
            .iter()
            .filter_map(|&h| self.get(h))
            .cloned()
            .collect()
    }
}

/// Creates an undirected edge between `a` and `b`.
///
/// Appends `b` to `a`'s adjacency and `a` to `b`'s. Duplicate edges are not
/// filtered; that discipline belongs to the linking strategy. Unknown handles
/// leave the arena untouched.
pub fn connect_nodes(arena: &mut NodeArena, a: NodeId, b: NodeId) {
    let len = arena.nodes.len();
    if a.index() >= len || b.index() >= len {
        tracing::warn!(%a, %b, len, "connect_nodes called with an unknown handle");
        return;
    }
    arena.nodes[a.index()].push_neighbor(b);
    arena.nodes[b.index()].push_neighbor(a);
}
