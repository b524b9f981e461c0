//! Vertex store: identifier-keyed vertex records shared by both graph variants.

use std::collections::{BTreeSet, HashMap};

use crate::types::{unknown, NetworkError, NetworkResult, VertexId};

use super::vertex::Vertex;

/// Owns every vertex of a graph, keyed by identifier.
///
/// Each stored record's own id equals its key. Records are only created
/// through [`VertexStore::add_vertex`], never during a query.
#[derive(Debug, Clone)]
pub struct VertexStore<K, V> {
    vertices: HashMap<K, V>,
}

impl<K: VertexId, V: Vertex<K>> VertexStore<K, V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(vertex_count),
        }
    }

    /// Insert a vertex with no neighbors. Returns false if it already existed.
    pub fn add_vertex(&mut self, id: K) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        log::trace!("add vertex {}", id);
        self.vertices.insert(id.clone(), V::new(id));
        true
    }

    pub fn contains(&self, id: &K) -> bool {
        self.vertices.contains_key(id)
    }

    /// Get a vertex record by identifier.
    pub fn get(&self, id: &K) -> Option<&V> {
        self.vertices.get(id)
    }

    /// Get a vertex record, failing with `UnknownVertex` if absent.
    pub fn require(&self, id: &K) -> NetworkResult<&V> {
        self.vertices.get(id).ok_or_else(|| unknown(id))
    }

    /// Check that `a -- b` may be linked: distinct endpoints, both present.
    /// Runs before any mutation so a failing insert leaves the store untouched.
    pub(crate) fn validate_edge(&self, a: &K, b: &K) -> NetworkResult<()> {
        if a == b {
            return Err(NetworkError::InvalidEdge(a.to_string()));
        }
        self.require(a)?;
        self.require(b)?;
        Ok(())
    }

    pub(crate) fn get_mut(&mut self, id: &K) -> NetworkResult<&mut V> {
        self.vertices.get_mut(id).ok_or_else(|| unknown(id))
    }

    /// True iff both exist and reference each other.
    pub fn adjacent(&self, a: &K, b: &K) -> bool {
        match (self.vertices.get(a), self.vertices.get(b)) {
            (Some(va), Some(vb)) => va.is_adjacent(b) && vb.is_adjacent(a),
            _ => false,
        }
    }

    /// Strict form of [`VertexStore::adjacent`]: absent ids are an error.
    pub fn try_adjacent(&self, a: &K, b: &K) -> NetworkResult<bool> {
        let va = self.require(a)?;
        self.require(b)?;
        Ok(va.is_adjacent(b))
    }

    /// Neighbor identifiers of `id`.
    pub fn neighbors(&self, id: &K) -> NetworkResult<BTreeSet<K>> {
        Ok(self.require(id)?.neighbor_ids().cloned().collect())
    }

    /// Weight of the edge between `a` and `b`, or 0 if they are not adjacent.
    pub fn weight(&self, a: &K, b: &K) -> u32 {
        self.vertices
            .get(a)
            .and_then(|v| v.weight_to(b))
            .unwrap_or(0)
    }

    /// All vertex identifiers in ascending order.
    pub fn vertex_ids(&self) -> BTreeSet<K> {
        self.vertices.keys().cloned().collect()
    }

    /// Iterate over vertex records (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.degree()).sum::<usize>() / 2
    }

    /// Every undirected edge once, smaller identifier first, with its weight.
    /// Sorted by endpoints.
    pub fn edges(&self) -> Vec<(K, K, u32)> {
        let mut edges: Vec<(K, K, u32)> = self
            .vertices
            .values()
            .flat_map(|v| {
                v.weighted_neighbors()
                    .filter(move |(n, _)| v.id() < *n)
                    .map(move |(n, w)| (v.id().clone(), n.clone(), w))
            })
            .collect();
        edges.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        edges
    }
}

impl<K: VertexId, V: Vertex<K>> Default for VertexStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
