//! Shared types for the friend-network library.

pub mod error;

use std::fmt::Display;
use std::hash::Hash;

pub use error::{NetworkError, NetworkResult};

/// Identifier stored as a vertex key.
///
/// Any hashable, ordered, printable value qualifies; member names (`String`)
/// and raw integer ids are the usual choices. Ordering makes adjacency
/// iteration and Dijkstra tie-breaks deterministic.
pub trait VertexId: Clone + Eq + Hash + Ord + Display {}

impl<T: Clone + Eq + Hash + Ord + Display> VertexId for T {}

/// An ordered sequence of adjacent identifier pairs, source side first.
pub type EdgeList<K> = Vec<(K, K)>;

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: u32 = 1;

pub(crate) fn unknown<K: VertexId>(id: &K) -> NetworkError {
    NetworkError::UnknownVertex(id.to_string())
}
