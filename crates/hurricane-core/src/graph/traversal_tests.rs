//! Tests for spiral order, height layers, BFS and DFS.

use super::adjacency::{AdjacencyStrategy, ChainAdjacency, StarAdjacency, TreeAdjacency};
use super::arena::{connect_nodes, NodeArena};
use super::spiral::{LinearSpiral, LogarithmicSpiral};
use super::store::HurricaneGraph;
use super::traversal::{bfs, dfs, layers, spiral_order};
use super::types::{Node, NodeId, SpiralPosition};

fn ids(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(Node::id).collect()
}

/// Center plus `count` nodes on a linear spiral with the given steps.
fn build_graph(
    count: usize,
    spiral: LinearSpiral,
    strategy: Option<Box<dyn AdjacencyStrategy>>,
) -> HurricaneGraph {
    let graph = HurricaneGraph::new("c", "center", spiral, strategy);
    for i in 1..=count {
        graph.insert(&format!("n{i}"), &format!("node {i}")).unwrap();
    }
    graph
}

/// Arena with hand-made edges:
///
/// ```text
///   c ── a ── d
///   │    │
///   b ───┘    e (isolated)
/// ```
fn build_diamond_arena() -> NodeArena {
    let mut arena = NodeArena::with_center("c", "center");
    let a = arena.push("a", "", SpiralPosition::default());
    let b = arena.push("b", "", SpiralPosition::default());
    let d = arena.push("d", "", SpiralPosition::default());
    arena.push("e", "", SpiralPosition::default());

    connect_nodes(&mut arena, NodeId::CENTER, a);
    connect_nodes(&mut arena, NodeId::CENTER, b);
    connect_nodes(&mut arena, a, d);
    connect_nodes(&mut arena, b, a);
    arena
}

// ── Spiral order ───────────────────────────────────────────────────

#[test]
fn test_spiral_order_logarithmic_strictly_increasing() {
    let graph = HurricaneGraph::new(
        "c",
        "center",
        LogarithmicSpiral::new(1.0, 0.1, 0.0),
        Some(Box::new(ChainAdjacency)),
    );
    for id in ["n1", "n2", "n3"] {
        graph.insert(id, "data").unwrap();
    }

    let ordered = graph.spiral_order();
    // The center sits at r = 0, below the log spiral's r = a·e^0 = 1.
    assert_eq!(ids(&ordered), ["c", "n1", "n2", "n3"]);
    assert!(ordered.windows(2).all(|w| w[0].r() < w[1].r()));
}

#[test]
fn test_spiral_order_breaks_radius_ties_by_angle() {
    let graph = HurricaneGraph::new(
        "c",
        "center",
        |i: usize| {
            // Same radius for everyone, angles decreasing with index.
            SpiralPosition::new(1.0, 10.0 - i as f64, 0.0)
        },
        None,
    );
    for id in ["n1", "n2", "n3"] {
        graph.insert(id, "").unwrap();
    }

    // Center is at r = 0; the rest tie on r and sort by theta.
    assert_eq!(ids(&graph.spiral_order()), ["c", "n3", "n2", "n1"]);
}

#[test]
fn test_spiral_order_is_stable_for_identical_positions() {
    let graph = HurricaneGraph::new("c", "center", LinearSpiral::new(0.0, 0.0, 0.0), None);
    for id in ["n1", "n2", "n3"] {
        graph.insert(id, "").unwrap();
    }
    assert_eq!(ids(&graph.spiral_order()), ["c", "n1", "n2", "n3"]);
}

#[test]
fn test_spiral_order_does_not_reorder_store() {
    let graph = HurricaneGraph::new(
        "c",
        "center",
        |i: usize| SpiralPosition::new(10.0 - i as f64, 0.0, 0.0),
        None,
    );
    graph.insert("n1", "").unwrap();
    graph.insert("n2", "").unwrap();

    assert_eq!(ids(&graph.spiral_order()), ["c", "n2", "n1"]);
    assert_eq!(ids(&graph.all_nodes()), ["c", "n1", "n2"]);
}

#[test]
fn test_spiral_order_free_function_on_slice() {
    let graph = build_graph(4, LinearSpiral::new(1.0, 0.5, 0.0), None);
    let mut nodes = graph.all_nodes();
    nodes.reverse();
    assert_eq!(ids(&spiral_order(&nodes)), ["c", "n1", "n2", "n3", "n4"]);
}

// ── Height layers ──────────────────────────────────────────────────

#[test]
fn test_layers_bucket_by_height() {
    // z = 0, 1, 2, 3, 4 with layer size 2 → layers {c, n1}, {n2, n3}, {n4}
    let graph = build_graph(4, LinearSpiral::new(1.0, 0.0, 1.0), None);
    let result = graph.layers(2.0);

    assert_eq!(result.len(), 3);
    assert_eq!(ids(&result[0]), ["c", "n1"]);
    assert_eq!(ids(&result[1]), ["n2", "n3"]);
    assert_eq!(ids(&result[2]), ["n4"]);
}

#[test]
fn test_layers_keep_empty_gaps() {
    // z = 0, 3, 6 with layer size 1 → layers 0..=6, gaps empty
    let graph = build_graph(2, LinearSpiral::new(1.0, 0.0, 3.0), None);
    let result = graph.layers(1.0);

    assert_eq!(result.len(), 7);
    assert_eq!(ids(&result[0]), ["c"]);
    assert!(result[1].is_empty());
    assert!(result[2].is_empty());
    assert_eq!(ids(&result[3]), ["n1"]);
    assert_eq!(ids(&result[6]), ["n2"]);
}

#[test]
fn test_layers_flat_graph_is_single_layer() {
    let graph = build_graph(5, LinearSpiral::new(1.0, 0.3, 0.0), None);
    let result = graph.layers(0.2);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 6);
}

#[test]
fn test_layers_skip_negative_heights() {
    let graph = HurricaneGraph::new(
        "c",
        "center",
        |i: usize| SpiralPosition::new(1.0, 0.0, -(i as f64)),
        None,
    );
    graph.insert("below", "").unwrap();

    let result = layers(&graph.all_nodes(), 1.0);
    assert_eq!(result.len(), 1);
    assert_eq!(ids(&result[0]), ["c"]);
}

// ── BFS ────────────────────────────────────────────────────────────

#[test]
fn test_bfs_chain() {
    let graph = build_graph(4, LinearSpiral::new(1.0, 0.0, 0.0), Some(Box::new(ChainAdjacency)));
    assert_eq!(
        ids(&graph.bfs(NodeId::CENTER)),
        ["c", "n1", "n2", "n3", "n4"]
    );
    assert_eq!(
        ids(&graph.bfs(NodeId::new(2))),
        ["n2", "n1", "n3", "c", "n4"]
    );
}

#[test]
fn test_bfs_diamond_visits_each_node_once() {
    let arena = build_diamond_arena();
    let order = bfs(&arena, NodeId::CENTER);
    // c → [a, b]; a → [c, d, b]; b → [c, a]
    assert_eq!(
        order,
        [NodeId::CENTER, NodeId::new(1), NodeId::new(2), NodeId::new(3)]
    );
}

#[test]
fn test_bfs_excludes_unreachable() {
    let arena = build_diamond_arena();
    let order = bfs(&arena, NodeId::new(4));
    assert_eq!(order, [NodeId::new(4)]);
}

#[test]
fn test_bfs_unknown_start_is_empty() {
    let graph = build_graph(2, LinearSpiral::new(1.0, 0.0, 0.0), Some(Box::new(ChainAdjacency)));
    assert!(graph.bfs(NodeId::new(42)).is_empty());
}

#[test]
fn test_bfs_star_visits_hub_neighbors_in_order() {
    let graph = build_graph(3, LinearSpiral::new(1.0, 0.0, 0.0), Some(Box::new(StarAdjacency)));
    assert_eq!(ids(&graph.bfs(NodeId::new(3))), ["n3", "c", "n1", "n2"]);
}

// ── DFS ────────────────────────────────────────────────────────────

#[test]
fn test_dfs_chain() {
    let graph = build_graph(4, LinearSpiral::new(1.0, 0.0, 0.0), Some(Box::new(ChainAdjacency)));
    assert_eq!(
        ids(&graph.dfs(NodeId::CENTER)),
        ["c", "n1", "n2", "n3", "n4"]
    );
}

#[test]
fn test_dfs_follows_first_neighbor_first() {
    let arena = build_diamond_arena();
    let order = dfs(&arena, NodeId::CENTER);
    // c → a (first) → d, then back to a's next neighbour b
    assert_eq!(
        order,
        [NodeId::CENTER, NodeId::new(1), NodeId::new(3), NodeId::new(2)]
    );
}

#[test]
fn test_dfs_differs_from_bfs_on_tree() {
    let graph = build_graph(3, LinearSpiral::new(1.0, 0.0, 0.0), Some(Box::new(TreeAdjacency)));
    // c: [n1, n2, n3]; n1: [c, n2]; n2: [c, n1, n3]; n3: [c, n2]
    assert_eq!(ids(&graph.bfs(NodeId::CENTER)), ["c", "n1", "n2", "n3"]);
    assert_eq!(ids(&graph.dfs(NodeId::new(3))), ["n3", "c", "n1", "n2"]);
}

#[test]
fn test_dfs_isolated_and_unknown() {
    let arena = build_diamond_arena();
    assert_eq!(dfs(&arena, NodeId::new(4)), [NodeId::new(4)]);
    assert!(dfs(&arena, NodeId::new(9)).is_empty());
}

#[test]
fn test_traversals_cover_same_reachable_set() {
    let graph = build_graph(30, LinearSpiral::new(0.2, 0.3, 0.1), Some(Box::new(TreeAdjacency)));
    let mut from_bfs: Vec<NodeId> = graph.bfs(NodeId::new(7)).iter().map(Node::handle).collect();
    let mut from_dfs: Vec<NodeId> = graph.dfs(NodeId::new(7)).iter().map(Node::handle).collect();
    from_bfs.sort();
    from_dfs.sort();
    assert_eq!(from_bfs, from_dfs);
    assert_eq!(from_bfs.len(), graph.len());
}
