//! Time-based termination.

use std::time::Duration;

use super::{Termination, TerminationReason};
use crate::scope::SearchScope;

/// Terminates after a time limit.
///
/// A zero limit stops the search at its first check.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use raises_solver::termination::TimeTermination;
///
/// let term = TimeTermination::new(Duration::from_secs(20));
/// let term = TimeTermination::millis(500);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn check(&self, scope: &SearchScope<'_>) -> Option<TerminationReason> {
        (scope.elapsed() >= self.limit).then_some(TerminationReason::TimeLimit)
    }
}
