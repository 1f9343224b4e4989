//! Scope hierarchy for search state management.
//!
//! - [`SharedProgress`]: one per solve, shared by every search shard
//! - [`SearchScope`]: one per shard, owns its local best and counters

mod search;
mod shared;

pub use search::SearchScope;
pub use shared::SharedProgress;

#[cfg(test)]
mod tests;
