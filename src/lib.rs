//! Friend Network: shortest chains of mutual friends in a social graph.
//!
//! Members are vertices of an undirected graph, optionally edge-weighted.
//! The unweighted [`Graph`] answers fewest-hops queries with BFS; the
//! [`WeightedGraph`] answers least-total-weight queries with Dijkstra. Both
//! return the path as an ordered list of adjacent pairs.

pub mod cli;
pub mod graph;
pub mod loader;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs_predecessors, dijkstra_predecessors, reconstruct, to_edges, Graph, GraphSnapshot,
    PlainVertex, Predecessors, SnapshotEdge, Vertex, VertexStore, WeightedGraph, WeightedVertex,
};
pub use loader::{build_friend_network, load_friend_network, FriendNetwork, LoadOptions};
pub use types::{EdgeList, NetworkError, NetworkResult, VertexId, DEFAULT_WEIGHT};
