//! In-memory social graphs: the core data structures and path queries.

pub mod path;
pub mod snapshot;
pub mod store;
pub mod traversal;
pub mod unweighted;
pub mod vertex;
pub mod weighted;

pub use path::{reconstruct, to_edges};
pub use snapshot::{GraphSnapshot, SnapshotEdge};
pub use store::VertexStore;
pub use traversal::{bfs_predecessors, dijkstra_predecessors, Predecessors};
pub use unweighted::Graph;
pub use vertex::{PlainVertex, Vertex, WeightedVertex};
pub use weighted::WeightedGraph;
