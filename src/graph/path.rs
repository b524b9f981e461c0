//! Path reconstruction: predecessor map -> vertex path -> edge list.

use crate::types::{EdgeList, VertexId};

use super::traversal::Predecessors;

/// Walk parent pointers from `target` back to `source`.
///
/// Returns the vertex path in source-to-target order, or an empty vector
/// when `target` is unreachable. `source == target` yields `[source]`.
pub fn reconstruct<K: VertexId>(source: &K, target: &K, predecessors: &Predecessors<K>) -> Vec<K> {
    let mut path = Vec::new();
    let mut current = target;

    while current != source {
        // A chain longer than the map itself can only be a cycle.
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        match predecessors.get(current) {
            Some(parent) => {
                path.push(current.clone());
                current = parent;
            }
            None => return Vec::new(),
        }
    }

    path.push(source.clone());
    path.reverse();
    path
}

/// Consecutive pairs of a vertex path. Fewer than two vertices give no edges.
pub fn to_edges<K: VertexId>(path: &[K]) -> EdgeList<K> {
    path.windows(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}
