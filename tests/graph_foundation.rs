//! Graph construction, adjacency, and error contract tests.

use friend_network::graph::{Graph, WeightedGraph};
use friend_network::types::NetworkError;

fn names(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn s(id: &str) -> String {
    id.to_string()
}

// ==================== Vertex Tests ====================

#[test]
fn test_add_vertex_idempotent() {
    let mut graph: Graph<String> = Graph::new();
    graph.add_vertex(s("a"));
    graph.add_vertex(s("b"));
    graph.add_edge(&s("a"), &s("b")).unwrap();
    graph.add_vertex(s("a"));

    assert_eq!(graph.vertex_count(), 2);
    // Re-adding must not wipe existing adjacency.
    assert!(graph.adjacent(&s("a"), &s("b")));
}

#[test]
fn test_vertex_ids_sorted() {
    let mut graph = Graph::new();
    for id in ["carol", "alice", "bob"] {
        graph.add_vertex(s(id));
    }
    let ids: Vec<String> = graph.vertex_ids().into_iter().collect();
    assert_eq!(ids, names(&["alice", "bob", "carol"]));
}

#[test]
fn test_weighted_add_vertex_idempotent() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex(1u32);
    graph.add_vertex(2u32);
    graph.add_weighted_edge(&1, &2, 4).unwrap();
    graph.add_vertex(1);
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.weight(&1, &2), 4);
}

// ==================== Edge Tests ====================

#[test]
fn test_edge_symmetry() {
    let mut graph = Graph::new();
    graph.add_vertex(s("a"));
    graph.add_vertex(s("b"));
    graph.add_edge(&s("a"), &s("b")).unwrap();

    assert!(graph.adjacent(&s("a"), &s("b")));
    assert!(graph.adjacent(&s("b"), &s("a")));
    assert!(graph.neighbors(&s("a")).unwrap().contains("b"));
    assert!(graph.neighbors(&s("b")).unwrap().contains("a"));
}

#[test]
fn test_weight_symmetry() {
    let mut graph = WeightedGraph::new();
    for id in 0u32..3 {
        graph.add_vertex(id);
    }
    graph.add_weighted_edge(&0, &1, 3).unwrap();
    graph.add_weighted_edge(&2, &1, 5).unwrap();

    assert_eq!(graph.weight(&0, &1), 3);
    assert_eq!(graph.weight(&1, &0), 3);
    assert_eq!(graph.weight(&1, &2), 5);
    assert_eq!(graph.weight(&2, &1), 5);
    assert!(graph.adjacent(&0, &1) && graph.adjacent(&1, &0));
}

#[test]
fn test_weight_zero_when_not_adjacent() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex(0u32);
    graph.add_vertex(1u32);
    assert_eq!(graph.weight(&0, &1), 0);
}

#[test]
fn test_default_edge_weight_is_one() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex(s("a"));
    graph.add_vertex(s("b"));
    graph.add_edge(&s("a"), &s("b")).unwrap();
    assert_eq!(graph.weight(&s("a"), &s("b")), 1);
}

#[test]
fn test_reweight_last_write_wins() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex(0u32);
    graph.add_vertex(1u32);
    graph.add_weighted_edge(&0, &1, 2).unwrap();
    graph.add_weighted_edge(&1, &0, 5).unwrap();

    assert_eq!(graph.weight(&0, &1), 5);
    assert_eq!(graph.weight(&1, &0), 5);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_duplicate_edge_absorbed() {
    let mut graph = Graph::new();
    graph.add_vertex(1u64);
    graph.add_vertex(2u64);
    graph.add_edge(&1, &2).unwrap();
    graph.add_edge(&2, &1).unwrap();
    graph.add_edge(&1, &2).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(&1).unwrap().len(), 1);
    assert_eq!(graph.edges(), vec![(1, 2)]);
}

#[test]
fn test_edges_listed_once() {
    let mut graph = WeightedGraph::new();
    for id in ["a", "b", "c"] {
        graph.add_vertex(s(id));
    }
    graph.add_weighted_edge(&s("c"), &s("a"), 2).unwrap();
    graph.add_weighted_edge(&s("b"), &s("a"), 1).unwrap();

    assert_eq!(
        graph.edges(),
        vec![(s("a"), s("b"), 1), (s("a"), s("c"), 2)]
    );
}

// ==================== Error Contract Tests ====================

#[test]
fn test_self_loop_rejected() {
    let mut graph = Graph::new();
    graph.add_vertex(s("a"));
    match graph.add_edge(&s("a"), &s("a")) {
        Err(NetworkError::InvalidEdge(id)) => assert_eq!(id, "a"),
        other => panic!("Expected InvalidEdge, got {:?}", other),
    }
    assert!(!graph.adjacent(&s("a"), &s("a")));
}

#[test]
fn test_self_loop_rejected_even_when_absent() {
    let mut graph: WeightedGraph<String> = WeightedGraph::new();
    assert!(matches!(
        graph.add_weighted_edge(&s("x"), &s("x"), 3),
        Err(NetworkError::InvalidEdge(_))
    ));
}

#[test]
fn test_unknown_vertex_rejected() {
    let mut graph: Graph<String> = Graph::new();
    match graph.add_edge(&s("x"), &s("y")) {
        Err(NetworkError::UnknownVertex(id)) => assert_eq!(id, "x"),
        other => panic!("Expected UnknownVertex, got {:?}", other),
    }
}

#[test]
fn test_failed_edge_leaves_graph_unchanged() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex(s("a"));
    let result = graph.add_weighted_edge(&s("a"), &s("ghost"), 2);
    assert!(matches!(result, Err(NetworkError::UnknownVertex(ref id)) if id == "ghost"));

    assert!(graph.neighbors(&s("a")).unwrap().is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.contains(&s("ghost")));
}

#[test]
fn test_zero_weight_rejected() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex(0u32);
    graph.add_vertex(1u32);
    assert!(matches!(
        graph.add_weighted_edge(&0, &1, 0),
        Err(NetworkError::InvalidWeight { weight: 0 })
    ));
    assert!(!graph.adjacent(&0, &1));
}

#[test]
fn test_adjacent_absent_is_false() {
    let mut graph = Graph::new();
    graph.add_vertex(s("a"));
    assert!(!graph.adjacent(&s("a"), &s("nobody")));
    assert!(!graph.adjacent(&s("nobody"), &s("a")));
}

#[test]
fn test_try_adjacent_strict() {
    let mut graph = Graph::new();
    graph.add_vertex(s("a"));
    graph.add_vertex(s("b"));
    assert!(!graph.try_adjacent(&s("a"), &s("b")).unwrap());
    graph.add_edge(&s("a"), &s("b")).unwrap();
    assert!(graph.try_adjacent(&s("a"), &s("b")).unwrap());
    assert!(matches!(
        graph.try_adjacent(&s("a"), &s("nobody")),
        Err(NetworkError::UnknownVertex(_))
    ));
}

#[test]
fn test_neighbors_unknown_vertex() {
    let graph: WeightedGraph<String> = WeightedGraph::new();
    assert!(matches!(
        graph.neighbors(&s("nobody")),
        Err(NetworkError::UnknownVertex(_))
    ));
}

#[test]
fn test_error_messages() {
    let err = NetworkError::UnknownVertex("zed".to_string());
    assert_eq!(err.to_string(), "Unknown vertex: zed");
    let err = NetworkError::InvalidWeight { weight: 0 };
    assert_eq!(err.to_string(), "Edge weight must be positive, got 0");
}

// ==================== Snapshot Tests ====================

#[test]
fn test_snapshot_bounds_vertices() {
    let mut graph = Graph::new();
    for id in 0u32..6 {
        graph.add_vertex(id);
    }
    for id in 1u32..6 {
        graph.add_edge(&(id - 1), &id).unwrap();
    }

    let snap = graph.snapshot(3);
    assert_eq!(snap.nodes, names(&["0", "1", "2"]));
    // Only edges with both ends kept: 0-1 and 1-2.
    assert_eq!(snap.edges.len(), 2);
    assert!(snap.edges.iter().all(|e| e.weight == 1 && !e.on_path));
}

#[test]
fn test_snapshot_marks_path_both_orientations() {
    let mut graph = WeightedGraph::new();
    for id in ["a", "b", "c"] {
        graph.add_vertex(s(id));
    }
    graph.add_weighted_edge(&s("a"), &s("b"), 2).unwrap();
    graph.add_weighted_edge(&s("b"), &s("c"), 4).unwrap();

    // Path given target-to-source still highlights the stored a-b edge.
    let snap = graph.snapshot_with_path(10, &[(s("b"), s("a"))]);
    let marked: Vec<_> = snap.path_edges().collect();
    assert_eq!(marked.len(), 1);
    assert_eq!((marked[0].source.as_str(), marked[0].target.as_str()), ("a", "b"));
    assert_eq!(marked[0].weight, 2);

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(json["edges"][0]["on_path"], true);
}
