//! Unweighted social graph with BFS shortest paths.

use std::collections::BTreeSet;

use crate::types::{EdgeList, NetworkResult, VertexId};

use super::path::{reconstruct, to_edges};
use super::snapshot::GraphSnapshot;
use super::store::VertexStore;
use super::traversal::bfs_predecessors;
use super::vertex::PlainVertex;

/// Undirected, unweighted graph. Adjacency is symmetric and loop-free.
#[derive(Debug, Clone)]
pub struct Graph<K: VertexId> {
    store: VertexStore<K, PlainVertex<K>>,
}

impl<K: VertexId> Graph<K> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            store: VertexStore::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            store: VertexStore::with_capacity(vertex_count),
        }
    }

    /// Add a vertex. Adding an existing id is a no-op.
    pub fn add_vertex(&mut self, id: K) {
        self.store.add_vertex(id);
    }

    /// Link two existing, distinct vertices. Re-adding an edge changes nothing.
    pub fn add_edge(&mut self, a: &K, b: &K) -> NetworkResult<()> {
        self.store.validate_edge(a, b)?;
        self.store.get_mut(a)?.link(b.clone());
        self.store.get_mut(b)?.link(a.clone());
        Ok(())
    }

    /// True iff both vertices exist and are neighbors.
    pub fn adjacent(&self, a: &K, b: &K) -> bool {
        self.store.adjacent(a, b)
    }

    /// Like [`Graph::adjacent`], but an absent id is an `UnknownVertex` error.
    pub fn try_adjacent(&self, a: &K, b: &K) -> NetworkResult<bool> {
        self.store.try_adjacent(a, b)
    }

    pub fn neighbors(&self, id: &K) -> NetworkResult<BTreeSet<K>> {
        self.store.neighbors(id)
    }

    /// A fewest-edges path from `source` to `target` as consecutive pairs.
    ///
    /// Empty when `target` is unreachable or equals `source`. Both ids must
    /// have been added.
    pub fn shortest_path(&self, source: &K, target: &K) -> NetworkResult<EdgeList<K>> {
        self.store.require(target)?;
        let parents = bfs_predecessors(&self.store, source)?;
        let path = reconstruct(source, target, &parents);
        log::debug!(
            "bfs path {} -> {}: {} vertices",
            source,
            target,
            path.len()
        );
        Ok(to_edges(&path))
    }

    /// All vertex ids in ascending order.
    pub fn vertex_ids(&self) -> BTreeSet<K> {
        self.store.vertex_ids()
    }

    pub fn contains(&self, id: &K) -> bool {
        self.store.contains(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// Every edge once as `(smaller, larger)`.
    pub fn edges(&self) -> Vec<(K, K)> {
        self.store
            .edges()
            .into_iter()
            .map(|(a, b, _)| (a, b))
            .collect()
    }

    /// Bounded display view of the graph.
    pub fn snapshot(&self, max_vertices: usize) -> GraphSnapshot {
        GraphSnapshot::capture(&self.store, max_vertices, &[])
    }

    /// Display view with the edges of `path` flagged.
    pub fn snapshot_with_path(&self, max_vertices: usize, path: &[(K, K)]) -> GraphSnapshot {
        GraphSnapshot::capture(&self.store, max_vertices, path)
    }

    /// Borrow the underlying vertex store.
    pub fn store(&self) -> &VertexStore<K, PlainVertex<K>> {
        &self.store
    }
}

impl<K: VertexId> Default for Graph<K> {
    fn default() -> Self {
        Self::new()
    }
}
