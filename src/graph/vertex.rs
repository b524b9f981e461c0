//! Vertex records: the neighbor capability shared by both graph variants.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{VertexId, DEFAULT_WEIGHT};

/// A vertex that knows its own identifier and its neighbors.
///
/// Adjacency containers are ordered, so neighbor iteration is stable across
/// runs for identical input.
pub trait Vertex<K: VertexId> {
    /// Create a vertex with no neighbors.
    fn new(id: K) -> Self;

    /// The identifier this vertex is stored under.
    fn id(&self) -> &K;

    /// Neighbor identifiers in ascending order.
    fn neighbor_ids<'a>(&'a self) -> impl Iterator<Item = &'a K> + 'a
    where
        K: 'a;

    /// Neighbors paired with the weight of the connecting edge.
    fn weighted_neighbors<'a>(&'a self) -> impl Iterator<Item = (&'a K, u32)> + 'a
    where
        K: 'a;

    /// Weight of the edge to `other`, if the two are adjacent.
    fn weight_to(&self, other: &K) -> Option<u32>;

    /// Number of neighbors.
    fn degree(&self) -> usize;

    /// True if `other` is a neighbor of this vertex.
    fn is_adjacent(&self, other: &K) -> bool {
        self.weight_to(other).is_some()
    }
}

/// Vertex of an unweighted graph: an identifier and a set of neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainVertex<K> {
    id: K,
    neighbors: BTreeSet<K>,
}

impl<K: VertexId> PlainVertex<K> {
    pub(crate) fn link(&mut self, other: K) {
        self.neighbors.insert(other);
    }

    /// Borrow the neighbor set.
    pub fn neighbors(&self) -> &BTreeSet<K> {
        &self.neighbors
    }
}

impl<K: VertexId> Vertex<K> for PlainVertex<K> {
    fn new(id: K) -> Self {
        Self {
            id,
            neighbors: BTreeSet::new(),
        }
    }

    fn id(&self) -> &K {
        &self.id
    }

    fn neighbor_ids<'a>(&'a self) -> impl Iterator<Item = &'a K> + 'a
    where
        K: 'a,
    {
        self.neighbors.iter()
    }

    // Every edge of an unweighted graph counts as one hop.
    fn weighted_neighbors<'a>(&'a self) -> impl Iterator<Item = (&'a K, u32)> + 'a
    where
        K: 'a,
    {
        self.neighbors.iter().map(|n| (n, DEFAULT_WEIGHT))
    }

    fn weight_to(&self, other: &K) -> Option<u32> {
        self.neighbors.contains(other).then_some(DEFAULT_WEIGHT)
    }

    fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Vertex of a weighted graph: an identifier and a neighbor -> weight map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedVertex<K> {
    id: K,
    neighbors: BTreeMap<K, u32>,
}

impl<K: VertexId> WeightedVertex<K> {
    /// Insert or overwrite the weight of the edge to `other`.
    pub(crate) fn link(&mut self, other: K, weight: u32) {
        self.neighbors.insert(other, weight);
    }

    /// Borrow the neighbor -> weight map.
    pub fn neighbors(&self) -> &BTreeMap<K, u32> {
        &self.neighbors
    }
}

impl<K: VertexId> Vertex<K> for WeightedVertex<K> {
    fn new(id: K) -> Self {
        Self {
            id,
            neighbors: BTreeMap::new(),
        }
    }

    fn id(&self) -> &K {
        &self.id
    }

    fn neighbor_ids<'a>(&'a self) -> impl Iterator<Item = &'a K> + 'a
    where
        K: 'a,
    {
        self.neighbors.keys()
    }

    fn weighted_neighbors<'a>(&'a self) -> impl Iterator<Item = (&'a K, u32)> + 'a
    where
        K: 'a,
    {
        self.neighbors.iter().map(|(n, &w)| (n, w))
    }

    fn weight_to(&self, other: &K) -> Option<u32> {
        self.neighbors.get(other).copied()
    }

    fn degree(&self) -> usize {
        self.neighbors.len()
    }
}
