//! Display snapshots: a bounded, serializable view of a graph for renderers.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::VertexId;

use super::store::VertexStore;
use super::vertex::Vertex;

/// One undirected edge in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
    /// True if the edge lies on the highlighted path (either orientation).
    pub on_path: bool,
}

/// Vertices and edges handed to a renderer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<SnapshotEdge>,
}

impl GraphSnapshot {
    /// Take the first `max_vertices` ids in order and every edge between them.
    pub(crate) fn capture<K, V>(
        store: &VertexStore<K, V>,
        max_vertices: usize,
        path: &[(K, K)],
    ) -> Self
    where
        K: VertexId,
        V: Vertex<K>,
    {
        let kept: Vec<K> = store.vertex_ids().into_iter().take(max_vertices).collect();
        let kept_set: HashSet<&K> = kept.iter().collect();
        let highlighted: HashSet<(&K, &K)> = path
            .iter()
            .flat_map(|(a, b)| [(a, b), (b, a)])
            .collect();

        let edges = store
            .edges()
            .into_iter()
            .filter(|(a, b, _)| kept_set.contains(a) && kept_set.contains(b))
            .map(|(a, b, weight)| SnapshotEdge {
                on_path: highlighted.contains(&(&a, &b)),
                source: a.to_string(),
                target: b.to_string(),
                weight,
            })
            .collect();

        Self {
            nodes: kept.iter().map(|k| k.to_string()).collect(),
            edges,
        }
    }

    /// Edges flagged as part of the highlighted path.
    pub fn path_edges(&self) -> impl Iterator<Item = &SnapshotEdge> + '_ {
        self.edges.iter().filter(|e| e.on_path)
    }
}
