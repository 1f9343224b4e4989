//! Search statistics.

use serde::Serialize;

/// Counters describing how much work a solve did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Dice the search had to group after reduction.
    pub searched_dice: usize,
    /// Nodes visited across all shards.
    pub nodes_explored: u64,
    /// Nodes cut off by the bound.
    pub nodes_pruned: u64,
    /// Strict improvements of the incumbent, construction included.
    pub improvements: u64,
    /// Independent subtrees searched.
    pub shards: usize,
    /// Upper bound on the searched successes before any die was placed.
    pub root_bound: u32,
}
