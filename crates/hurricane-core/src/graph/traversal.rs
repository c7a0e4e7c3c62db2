//! Traversal algorithms over the spiral graph.
//!
//! BFS and DFS are generic over [`GraphTraversal`], so any adjacency source
//! can reuse them. Spiral ordering and height layering work on a node slice
//! and never reorder the caller's data.

use std::cmp::Ordering;
use std::collections::VecDeque;

use super::arena::NodeArena;
use super::types::{Node, NodeId};

/// Adjacency view required by the graph walks.
pub trait GraphTraversal {
    /// Returns the number of nodes. Valid handles are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Returns the neighbours of `node` in edge creation order.
    fn neighbors(&self, node: NodeId) -> &[NodeId];
}

impl GraphTraversal for NodeArena {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map_or(&[][..], Node::adjacent)
    }
}

/// Breadth-first walk from `start`.
///
/// Nodes are marked visited when enqueued, so each is queued at most once.
/// Neighbours are explored in adjacency order. Returns handles in visitation
/// order; an unknown `start` yields an empty result.
#[must_use]
pub fn bfs<G: GraphTraversal + ?Sized>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let count = graph.node_count();
    if start.index() >= count {
        tracing::trace!(%start, "bfs from unknown node");
        return Vec::new();
    }

    let mut visited = vec![false; count];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &next in graph.neighbors(current) {
            let seen = &mut visited[next.index()];
            if !*seen {
                *seen = true;
                queue.push_back(next);
            }
        }
    }

    order
}

/// Depth-first walk from `start`, iterative.
///
/// A node is marked visited when popped, so it may sit on the stack more than
/// once but is emitted once. Neighbours are pushed in reverse so the first
/// neighbour is explored first.
#[must_use]
pub fn dfs<G: GraphTraversal + ?Sized>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let count = graph.node_count();
    if start.index() >= count {
        tracing::trace!(%start, "dfs from unknown node");
        return Vec::new();
    }

    let mut visited = vec![false; count];
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(current) = stack.pop() {
        if visited[current.index()] {
            continue;
        }
        visited[current.index()] = true;
        order.push(current);

        stack.extend(
            graph
                .neighbors(current)
                .iter()
                .rev()
                .filter(|next| !visited[next.index()]),
        );
    }

    order
}

/// Orders by radius, then angle.
///
/// Comparison uses `==` semantics on floats, so `-0.0` and `0.0` tie.
fn spiral_cmp(a: &Node, b: &Node) -> Ordering {
    a.r()
        .partial_cmp(&b.r())
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.theta().partial_cmp(&b.theta()).unwrap_or(Ordering::Equal))
}

/// Returns a copy of `nodes` sorted by ascending `r`, ties by ascending `theta`.
///
/// The sort is stable: nodes at the same position keep insertion order.
#[must_use]
pub fn spiral_order(nodes: &[Node]) -> Vec<Node> {
    let mut sorted = nodes.to_vec();
    sorted.sort_by(spiral_cmp);
    sorted
}

/// Bucket index of a height for a given layer thickness.
// Reason: float-to-int `as` saturates; heights beyond i64 are out of scope.
#[allow(clippy::cast_possible_truncation)]
fn layer_of(z: f64, layer_size: f64) -> i64 {
    (z / layer_size).floor() as i64
}

/// Groups nodes into height layers of thickness `layer_size`.
///
/// Layer `k` holds the nodes with `floor(z / layer_size) == k`, in input
/// order. The result covers `0..=max_layer` with no gaps; layers nobody falls
/// into are empty. Nodes below height zero fall in negative layers and are
/// left out. `layer_size` must be positive.
#[must_use]
pub fn layers(nodes: &[Node], layer_size: f64) -> Vec<Vec<Node>> {
    let assigned: Vec<(i64, &Node)> = nodes
        .iter()
        .map(|node| (layer_of(node.z(), layer_size), node))
        .collect();
    let max_layer = assigned.iter().map(|&(k, _)| k).max().unwrap_or(0).max(0);

    // Reason: max_layer is non-negative and bounded by the node heights.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let mut buckets: Vec<Vec<Node>> = vec![Vec::new(); max_layer as usize + 1];
    for (k, node) in assigned {
        if let Ok(slot) = usize::try_from(k) {
            buckets[slot].push(node.clone());
        }
    }
    buckets
}
