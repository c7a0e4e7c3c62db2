//! Linking strategies deciding which edges a new node receives.
//!
//! A strategy runs once per insertion, after the node has been appended and
//! while the graph's write lock is still held. It sees the arena mutably but
//! can only add edges through [`connect_nodes`], which keeps adjacency
//! symmetric.

use super::arena::{connect_nodes, NodeArena};
use super::types::NodeId;

/// Wires a freshly inserted node into the graph.
///
/// Closures of the form `Fn(&mut NodeArena, NodeId)` implement this trait.
pub trait AdjacencyStrategy: Send + Sync {
    /// Adds the edges for `new_node`, which is the last node in `arena`.
    fn link(&self, arena: &mut NodeArena, new_node: NodeId);

    /// Short name used in logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> AdjacencyStrategy for F
where
    F: Fn(&mut NodeArena, NodeId) + Send + Sync,
{
    fn link(&self, arena: &mut NodeArena, new_node: NodeId) {
        self(arena, new_node);
    }
}

/// Node inserted just before the newest one, if any.
fn previous(arena: &NodeArena) -> Option<NodeId> {
    arena.len().checked_sub(2).map(NodeId::new)
}

/// Links each node to the one inserted right before it.
///
/// The result is a path through insertion order that starts at the center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainAdjacency;

impl AdjacencyStrategy for ChainAdjacency {
    fn link(&self, arena: &mut NodeArena, new_node: NodeId) {
        if let Some(prev) = previous(arena) {
            connect_nodes(arena, prev, new_node);
        }
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}

/// Links every node directly to the center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarAdjacency;

impl AdjacencyStrategy for StarAdjacency {
    fn link(&self, arena: &mut NodeArena, new_node: NodeId) {
        let center = arena.center();
        // No self-loop on the center.
        if new_node != center {
            connect_nodes(arena, center, new_node);
        }
    }

    fn name(&self) -> &'static str {
        "star"
    }
}

/// Chain and star combined: each node links to the center and to its
/// predecessor.
///
/// The first node after the center has the center as its predecessor and
/// gets a single edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeAdjacency;

impl AdjacencyStrategy for TreeAdjacency {
    fn link(&self, arena: &mut NodeArena, new_node: NodeId) {
        let center = arena.center();
        connect_nodes(arena, center, new_node);
        if let Some(prev) = previous(arena).filter(|&prev| prev != center) {
            connect_nodes(arena, prev, new_node);
        }
    }

    fn name(&self) -> &'static str {
        "tree"
    }
}
