//! Deterministic name assignment for raw member ids.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::{NetworkError, NetworkResult};

/// Hands out display names to raw ids in first-appearance order.
///
/// The name pool is shuffled once with a seeded RNG, so the same names,
/// edges and seed always produce the same assignment. When the pool runs
/// out, names are reused with a numeric suffix ("Ada 2") to stay unique.
pub struct NameAssigner {
    pool: Vec<String>,
    assigned: HashMap<u64, String>,
    taken: HashSet<String>,
    next: usize,
}

impl NameAssigner {
    /// Create an assigner over `names`, shuffled with `seed`.
    pub fn new(names: Vec<String>, seed: u64) -> NetworkResult<Self> {
        if names.is_empty() {
            return Err(NetworkError::EmptyNameList);
        }
        let mut pool = names;
        let mut rng = StdRng::seed_from_u64(seed);
        pool.shuffle(&mut rng);
        Ok(Self {
            pool,
            assigned: HashMap::new(),
            taken: HashSet::new(),
            next: 0,
        })
    }

    /// Name for `raw_id`, assigning the next pool entry on first sight.
    pub fn name_for(&mut self, raw_id: u64) -> String {
        if let Some(name) = self.assigned.get(&raw_id) {
            return name.clone();
        }
        let base = &self.pool[self.next % self.pool.len()];
        let round = self.next / self.pool.len();
        if round > 0 {
            log::warn!("name pool exhausted, reusing {} for raw id {}", base, raw_id);
        }
        let mut suffix = round + 1;
        let mut name = if round == 0 {
            base.clone()
        } else {
            format!("{} {}", base, suffix)
        };
        // A suffixed name may collide with a literal pool entry.
        while self.taken.contains(&name) {
            suffix += 1;
            name = format!("{} {}", base, suffix);
        }
        self.next += 1;
        self.taken.insert(name.clone());
        self.assigned.insert(raw_id, name.clone());
        name
    }

    /// Number of raw ids named so far.
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }
}
