//! Builds friend networks from a name list and raw edge pairs.

pub mod naming;
pub mod reader;

use std::collections::BTreeSet;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Graph, WeightedGraph};
use crate::types::{EdgeList, NetworkResult};

pub use naming::NameAssigner;
pub use reader::{parse_edge_pairs, parse_names, read_edge_pairs, read_names};

/// Default seed for name shuffling and weight draws.
pub const DEFAULT_SEED: u64 = 111;

/// Weights are drawn from `1..=DEFAULT_MAX_WEIGHT` unless configured.
pub const DEFAULT_MAX_WEIGHT: u32 = 5;

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Seed for the name shuffle and the edge weight draw.
    pub seed: u64,
    /// Largest edge weight drawn for the weighted graph (at least 1).
    pub max_weight: u32,
    /// Use only the first `n` names of the list.
    pub name_limit: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_weight: DEFAULT_MAX_WEIGHT,
            name_limit: None,
        }
    }
}

/// The same members and friendships, unweighted and weighted.
#[derive(Debug, Clone)]
pub struct FriendNetwork {
    pub graph: Graph<String>,
    pub weighted: WeightedGraph<String>,
}

impl FriendNetwork {
    /// Shortest path between two members; Dijkstra when `weighted`, else BFS.
    pub fn shortest_path(
        &self,
        source: &str,
        target: &str,
        weighted: bool,
    ) -> NetworkResult<EdgeList<String>> {
        let (source, target) = (source.to_string(), target.to_string());
        if weighted {
            self.weighted.shortest_path(&source, &target)
        } else {
            self.graph.shortest_path(&source, &target)
        }
    }

    /// All member names in ascending order.
    pub fn members(&self) -> BTreeSet<String> {
        self.graph.vertex_ids()
    }

    pub fn is_member(&self, name: &str) -> bool {
        self.graph.contains(&name.to_string())
    }
}

/// Load a friend network from a name file and an edge-pair file.
pub fn load_friend_network(
    names_path: &Path,
    edges_path: &Path,
    options: &LoadOptions,
) -> NetworkResult<FriendNetwork> {
    let names = read_names(names_path)?;
    let pairs = read_edge_pairs(edges_path)?;
    log::debug!(
        "read {} names from {}, {} pairs from {}",
        names.len(),
        names_path.display(),
        pairs.len(),
        edges_path.display()
    );
    build_friend_network(names, &pairs, options)
}

/// Build both graphs from in-memory names and raw id pairs.
///
/// Raw ids are named in first-appearance order; each friendship gets one
/// weight in `1..=max_weight`, shared by both directions. Self pairs are
/// skipped.
pub fn build_friend_network(
    mut names: Vec<String>,
    pairs: &[(u64, u64)],
    options: &LoadOptions,
) -> NetworkResult<FriendNetwork> {
    if let Some(limit) = options.name_limit {
        names.truncate(limit);
    }
    let mut assigner = NameAssigner::new(names, options.seed)?;
    let mut rng = StdRng::seed_from_u64(options.seed);
    let max_weight = options.max_weight.max(1);

    let mut graph = Graph::new();
    let mut weighted = WeightedGraph::new();

    for &(raw_a, raw_b) in pairs {
        if raw_a == raw_b {
            log::warn!("skipping self-friendship of raw id {}", raw_a);
            continue;
        }
        let a = assigner.name_for(raw_a);
        let b = assigner.name_for(raw_b);
        graph.add_vertex(a.clone());
        graph.add_vertex(b.clone());
        weighted.add_vertex(a.clone());
        weighted.add_vertex(b.clone());

        let weight = rng.gen_range(1..=max_weight);
        graph.add_edge(&a, &b)?;
        weighted.add_weighted_edge(&a, &b, weight)?;
    }

    log::debug!(
        "built friend network: {} members, {} friendships (pool of {} names)",
        graph.vertex_count(),
        graph.edge_count(),
        assigner.pool_size()
    );
    Ok(FriendNetwork { graph, weighted })
}
