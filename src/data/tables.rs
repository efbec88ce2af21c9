//! Depth-scaled tables and weighted random choice
//!
//! Every spawn cap and spawn weight in the game is a [`DepthTable`] or a
//! [`WeightEntry`], resolved against the current depth each time it is used.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Ordered `(min_depth, value)` steps.
///
/// Resolves to the value of the deepest threshold not below the current
/// depth. Entries are expected in increasing threshold order; an entry whose
/// threshold is lower than an earlier one is dominated and never chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepthTable(pub Vec<(u32, u32)>);

impl DepthTable {
    pub fn new(entries: Vec<(u32, u32)>) -> Self {
        Self(entries)
    }

    /// Value in effect at `depth`, or `default` when no threshold is reached
    pub fn resolve(&self, depth: u32, default: u32) -> u32 {
        resolve_by_depth(self, depth, default)
    }
}

/// Look up the value for `depth`: the last entry whose threshold is at most
/// `depth`, scanning from the deep end.
pub fn resolve_by_depth(table: &DepthTable, depth: u32, default: u32) -> u32 {
    table
        .0
        .iter()
        .rev()
        .find(|(threshold, _)| depth >= *threshold)
        .map_or(default, |(_, value)| *value)
}

/// Spawn weight of a single kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightEntry {
    /// Same weight at every depth
    Fixed(u32),
    /// Weight grows with depth; zero until the first threshold
    ByDepth(DepthTable),
}

impl WeightEntry {
    pub fn resolve(&self, depth: u32) -> u32 {
        match self {
            WeightEntry::Fixed(weight) => *weight,
            WeightEntry::ByDepth(table) => table.resolve(depth, 0),
        }
    }
}

/// Resolve a whole weight table for one depth, keeping its order
pub fn resolve_weights<K: Copy>(table: &[(K, WeightEntry)], depth: u32) -> Vec<(K, u32)> {
    table
        .iter()
        .map(|(kind, weight)| (*kind, weight.resolve(depth)))
        .collect()
}

/// Pick a key with probability proportional to its weight.
///
/// Draws `r` in `1..=total` and returns the first key whose running sum
/// reaches `r`, so the split is exact for a fair source.
pub fn weighted_choice<K: Copy>(rng: &mut impl Rng, weights: &[(K, u32)]) -> CoreResult<K> {
    let total: u64 = weights.iter().map(|(_, w)| u64::from(*w)).sum();
    if total == 0 {
        return Err(CoreError::EmptyWeightTable);
    }

    let roll = rng.gen_range(1..=total);
    let mut running = 0u64;
    for (key, weight) in weights {
        running += u64::from(*weight);
        if roll <= running {
            return Ok(*key);
        }
    }

    // running == total >= roll after the last entry
    Err(CoreError::EmptyWeightTable)
}
