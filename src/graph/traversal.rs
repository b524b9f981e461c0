//! Graph traversal algorithms (BFS, Dijkstra).
//!
//! Both produce a predecessor map keyed by vertex identifier; the path
//! module turns that map into a vertex path and then an edge list. Each call
//! allocates its own traversal state, so queries never share mutable data.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::types::{NetworkResult, VertexId};

use super::store::VertexStore;
use super::vertex::Vertex;

/// Maps each discovered vertex to the vertex it was reached from.
pub type Predecessors<K> = HashMap<K, K>;

/// Level-order traversal from `source` over the whole component.
///
/// Every vertex is visited at most once; its first discoverer is recorded
/// as its parent, which makes the parent chain a fewest-edges path. The
/// source itself has no entry.
pub fn bfs_predecessors<K, V>(
    store: &VertexStore<K, V>,
    source: &K,
) -> NetworkResult<Predecessors<K>>
where
    K: VertexId,
    V: Vertex<K>,
{
    store.require(source)?;

    let mut visited: HashSet<&K> = HashSet::new();
    let mut parents: Predecessors<K> = HashMap::new();
    let mut queue: VecDeque<&K> = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let Some(vertex) = store.get(current) else {
            continue;
        };
        for neighbor in vertex.neighbor_ids() {
            if visited.insert(neighbor) {
                parents.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor);
            }
        }
    }

    log::trace!("bfs from {} reached {} vertices", source, visited.len());
    Ok(parents)
}

/// Dijkstra's single-source shortest paths from `source`.
///
/// The frontier is a min-heap ordered by `(distance, identifier)`, so equal
/// distances are settled smallest identifier first. Stops once `target` is
/// settled when one is given; otherwise settles the whole component.
/// Weights must be strictly positive.
pub fn dijkstra_predecessors<K, V>(
    store: &VertexStore<K, V>,
    source: &K,
    target: Option<&K>,
) -> NetworkResult<Predecessors<K>>
where
    K: VertexId,
    V: Vertex<K>,
{
    store.require(source)?;

    let mut distances: HashMap<&K, u64> = HashMap::new();
    let mut parents: Predecessors<K> = HashMap::new();
    let mut visited: HashSet<&K> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(u64, &K)>> = BinaryHeap::new();

    distances.insert(source, 0);
    frontier.push(Reverse((0, source)));

    while let Some(Reverse((distance, current))) = frontier.pop() {
        // Stale entry: a shorter distance was already recorded or settled.
        if visited.contains(current) || distances.get(current).is_some_and(|&d| distance > d) {
            continue;
        }
        visited.insert(current);

        if target == Some(current) {
            break;
        }

        let Some(vertex) = store.get(current) else {
            continue;
        };
        for (neighbor, weight) in vertex.weighted_neighbors() {
            if visited.contains(neighbor) {
                continue;
            }
            let candidate = distance + u64::from(weight);
            let improves = distances
                .get(neighbor)
                .map_or(true, |&known| candidate < known);
            if improves {
                distances.insert(neighbor, candidate);
                parents.insert(neighbor.clone(), current.clone());
                frontier.push(Reverse((candidate, neighbor)));
            }
        }
    }

    log::trace!("dijkstra from {} settled {} vertices", source, visited.len());
    Ok(parents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::vertex::{PlainVertex, WeightedVertex};

    fn plain_chain(n: u32) -> VertexStore<u32, PlainVertex<u32>> {
        let mut store: VertexStore<u32, PlainVertex<u32>> = VertexStore::new();
        for i in 0..n {
            store.add_vertex(i);
        }
        for i in 1..n {
            store.get_mut(&(i - 1)).unwrap().link(i);
            store.get_mut(&i).unwrap().link(i - 1);
        }
        store
    }

    fn weighted(edges: &[(u32, u32, u32)]) -> VertexStore<u32, WeightedVertex<u32>> {
        let mut store: VertexStore<u32, WeightedVertex<u32>> = VertexStore::new();
        for &(a, b, w) in edges {
            store.add_vertex(a);
            store.add_vertex(b);
            store.get_mut(&a).unwrap().link(b, w);
            store.get_mut(&b).unwrap().link(a, w);
        }
        store
    }

    #[test]
    fn test_bfs_chain_parents() {
        let store = plain_chain(4);
        let parents = bfs_predecessors(&store, &0).unwrap();
        assert_eq!(parents.len(), 3);
        assert_eq!(parents[&1], 0);
        assert_eq!(parents[&2], 1);
        assert_eq!(parents[&3], 2);
        assert!(!parents.contains_key(&0));
    }

    #[test]
    fn test_bfs_isolated_source() {
        let mut store: VertexStore<u32, PlainVertex<u32>> = VertexStore::new();
        store.add_vertex(7);
        let parents = bfs_predecessors(&store, &7).unwrap();
        assert!(parents.is_empty());
    }

    #[test]
    fn test_bfs_unknown_source() {
        let store = plain_chain(2);
        assert!(bfs_predecessors(&store, &9).is_err());
    }

    #[test]
    fn test_dijkstra_prefers_lighter_detour() {
        // 0 -5- 2 is heavier than 0 -1- 1 -1- 2
        let store = weighted(&[(0, 2, 5), (0, 1, 1), (1, 2, 1)]);
        let parents = dijkstra_predecessors(&store, &0, None).unwrap();
        assert_eq!(parents[&2], 1);
        assert_eq!(parents[&1], 0);
    }

    #[test]
    fn test_dijkstra_tie_breaks_on_smaller_id() {
        // Two equal-cost routes to 3: via 1 and via 2.
        let store = weighted(&[(0, 1, 2), (0, 2, 2), (1, 3, 2), (2, 3, 2)]);
        let parents = dijkstra_predecessors(&store, &0, None).unwrap();
        assert_eq!(parents[&3], 1);
    }

    #[test]
    fn test_dijkstra_stops_at_target() {
        let store = weighted(&[(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let parents = dijkstra_predecessors(&store, &0, Some(&1)).unwrap();
        assert_eq!(parents[&1], 0);
        // Settling the target ends the search before 1 is expanded.
        assert!(!parents.contains_key(&2));
    }

    #[test]
    fn test_dijkstra_on_plain_store_counts_hops() {
        let store = plain_chain(5);
        let parents = dijkstra_predecessors(&store, &0, None).unwrap();
        assert_eq!(parents[&4], 3);
    }
}
