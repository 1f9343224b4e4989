//! Termination conditions for the search.

mod composite;
mod external;
mod node_count;
mod time;

use std::fmt::{self, Debug};

use serde::Serialize;

use crate::scope::SearchScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Why a solve stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Every branch was explored or pruned.
    Exhausted,
    /// The best grouping met the root upper bound, so nothing can beat it.
    OptimalBoundReached,
    /// The time budget ran out.
    TimeLimit,
    /// The node budget ran out.
    NodeLimit,
    /// Termination was requested through a handle.
    Cancelled,
}

impl TerminationReason {
    /// Whether the search was cut short before proving optimality.
    pub fn is_early(self) -> bool {
        !matches!(
            self,
            TerminationReason::Exhausted | TerminationReason::OptimalBoundReached
        )
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TerminationReason::Exhausted => "search exhausted",
            TerminationReason::OptimalBoundReached => "optimal bound reached",
            TerminationReason::TimeLimit => "time limit",
            TerminationReason::NodeLimit => "node limit",
            TerminationReason::Cancelled => "cancelled",
        };
        f.write_str(text)
    }
}

/// Trait for determining when to stop searching.
///
/// Checked once per search node, so implementations must be cheap.
pub trait Termination: Send + Sync + Debug {
    /// Returns why searching should stop, or `None` to keep going.
    fn check(&self, scope: &SearchScope<'_>) -> Option<TerminationReason>;

    /// Returns true if searching should stop.
    fn is_terminated(&self, scope: &SearchScope<'_>) -> bool {
        self.check(scope).is_some()
    }
}

/// An absent condition never terminates.
impl<T: Termination> Termination for Option<T> {
    fn check(&self, scope: &SearchScope<'_>) -> Option<TerminationReason> {
        self.as_ref().and_then(|t| t.check(scope))
    }
}

#[cfg(test)]
mod tests;
