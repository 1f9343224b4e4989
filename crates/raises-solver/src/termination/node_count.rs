//! Node count termination.

use super::{Termination, TerminationReason};
use crate::scope::SearchScope;

/// Terminates after a number of search nodes have been visited.
///
/// Deterministic for single-threaded searches, which makes it the budget of
/// choice in tests. With several shards the count is approximate.
#[derive(Debug, Clone)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeCountTermination {
    fn check(&self, scope: &SearchScope<'_>) -> Option<TerminationReason> {
        (scope.total_nodes() >= self.limit).then_some(TerminationReason::NodeLimit)
    }
}
