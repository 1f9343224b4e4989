//! Solve results.

use std::time::Duration;

use raises_core::{Group, Partition, ScoringMode, Successes};
use serde::Serialize;

use crate::event::serialize_millis;
use crate::stats::SearchStats;
use crate::termination::TerminationReason;

/// The outcome of one solve.
///
/// `groups` covers every input die exactly once, reserved groups first.
/// Member positions refer to the caller's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveResult {
    pub mode: ScoringMode,
    pub score: Successes,
    pub groups: Vec<Group>,
    /// Groups fixed by the reduction pass, if it removed any.
    pub reserved_groups: Option<Vec<Group>>,
    /// The search stopped on a budget or cancellation before proving the
    /// score optimal.
    pub timed_out: bool,
    /// The score is proven optimal.
    pub exhaustive: bool,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl SolveResult {
    /// The result for an empty roll: nothing to group, nothing to search.
    pub fn empty(mode: ScoringMode) -> Self {
        Self {
            mode,
            score: Successes::ZERO,
            groups: Vec::new(),
            reserved_groups: None,
            timed_out: false,
            exhaustive: true,
            elapsed: Duration::ZERO,
            termination: TerminationReason::Exhausted,
            stats: SearchStats::default(),
        }
    }

    /// Face values of each group, in result order.
    pub fn group_values(&self) -> Vec<Vec<u8>> {
        self.groups.iter().map(Group::values).collect()
    }

    /// Successes contributed by reserved groups.
    pub fn reserved_score(&self) -> Successes {
        Successes::of(self.reserved_groups.as_ref().map_or(0, |g| g.len() as u32))
    }

    pub fn is_optimal(&self) -> bool {
        self.exhaustive
    }

    /// The groups as a [`Partition`], e.g. to re-score or check coverage.
    pub fn partition(&self) -> Partition {
        Partition::from_groups(self.groups.clone())
    }
}
