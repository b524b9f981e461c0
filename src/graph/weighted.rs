//! Weighted social graph with Dijkstra shortest paths.

use std::collections::BTreeSet;

use crate::types::{EdgeList, NetworkError, NetworkResult, VertexId, DEFAULT_WEIGHT};

use super::path::{reconstruct, to_edges};
use super::snapshot::GraphSnapshot;
use super::store::VertexStore;
use super::traversal::dijkstra_predecessors;
use super::vertex::WeightedVertex;

/// Undirected graph whose edges carry one positive integer weight,
/// stored identically on both endpoints.
#[derive(Debug, Clone)]
pub struct WeightedGraph<K: VertexId> {
    store: VertexStore<K, WeightedVertex<K>>,
}

impl<K: VertexId> WeightedGraph<K> {
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

    /// Link two vertices with the default weight of 1.
    pub fn add_edge(&mut self, a: &K, b: &K) -> NetworkResult<()> {
        self.add_weighted_edge(a, b, DEFAULT_WEIGHT)
    }

    /// Link two existing, distinct vertices. Re-adding overwrites the weight.
    pub fn add_weighted_edge(&mut self, a: &K, b: &K, weight: u32) -> NetworkResult<()> {
        self.store.validate_edge(a, b)?;
        if weight == 0 {
            return Err(NetworkError::InvalidWeight { weight });
        }
        self.store.get_mut(a)?.link(b.clone(), weight);
        self.store.get_mut(b)?.link(a.clone(), weight);
        Ok(())
    }

    /// True iff both vertices exist and are neighbors.
    pub fn adjacent(&self, a: &K, b: &K) -> bool {
        self.store.adjacent(a, b)
    }

    pub fn try_adjacent(&self, a: &K, b: &K) -> NetworkResult<bool> {
        self.store.try_adjacent(a, b)
    }

    pub fn neighbors(&self, id: &K) -> NetworkResult<BTreeSet<K>> {
        self.store.neighbors(id)
    }

    /// Weight of the edge `a -- b`, or 0 if they are not adjacent.
    ///
    /// Both ids are expected to exist; an absent id also reads as 0.
    pub fn weight(&self, a: &K, b: &K) -> u32 {
        self.store.weight(a, b)
    }

    /// A minimum-total-weight path from `source` to `target` as consecutive
    /// pairs. Empty when unreachable or when `source == target`.
    pub fn shortest_path(&self, source: &K, target: &K) -> NetworkResult<EdgeList<K>> {
        self.store.require(target)?;
        let parents = dijkstra_predecessors(&self.store, source, Some(target))?;
        let path = reconstruct(source, target, &parents);
        log::debug!(
            "dijkstra path {} -> {}: {} vertices",
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

    /// Every edge once as `(smaller, larger, weight)`.
    pub fn edges(&self) -> Vec<(K, K, u32)> {
        self.store.edges()
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
    pub fn store(&self) -> &VertexStore<K, WeightedVertex<K>> {
        &self.store
    }
}

impl<K: VertexId> Default for WeightedGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}
