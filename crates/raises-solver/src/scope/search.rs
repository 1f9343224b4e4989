//! Per-shard search scope.

use std::time::Duration;

use tracing::{debug, trace};

use super::SharedProgress;
use crate::event::Improvement;
use crate::problem::{Candidate, SearchProblem};
use crate::working::WorkingPartition;

// Local node counts are published to the shared counter in batches.
const NODE_FLUSH_INTERVAL: u64 = 1024;

/// State of one depth-first search over part of the tree.
///
/// Holds the shard's own best candidate and counters; everything other
/// shards need to see goes through [`SharedProgress`].
#[derive(Debug)]
pub struct SearchScope<'a> {
    shared: &'a SharedProgress,
    best: Option<Candidate>,
    nodes_explored: u64,
    nodes_flushed: u64,
    nodes_pruned: u64,
}

impl<'a> SearchScope<'a> {
    pub fn new(shared: &'a SharedProgress) -> Self {
        Self {
            shared,
            best: None,
            nodes_explored: 0,
            nodes_flushed: 0,
            nodes_pruned: 0,
        }
    }

    pub fn shared(&self) -> &'a SharedProgress {
        self.shared
    }

    pub fn elapsed(&self) -> Duration {
        self.shared.elapsed()
    }

    /// Counts one visited node.
    #[inline]
    pub fn record_node(&mut self) {
        self.nodes_explored += 1;
        if self.nodes_explored - self.nodes_flushed >= NODE_FLUSH_INTERVAL {
            self.flush();
        }
    }

    #[inline]
    pub fn record_prune(&mut self) {
        self.nodes_pruned += 1;
    }

    /// Nodes visited by every shard, including this one's unflushed count.
    pub fn total_nodes(&self) -> u64 {
        self.shared.nodes() + (self.nodes_explored - self.nodes_flushed)
    }

    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    pub fn nodes_pruned(&self) -> u64 {
        self.nodes_pruned
    }

    /// Publishes local node counts to the shared counter.
    pub fn flush(&mut self) {
        self.shared.add_nodes(self.nodes_explored - self.nodes_flushed);
        self.nodes_flushed = self.nodes_explored;
        trace!(event = "nodes", explored = self.nodes_explored, pruned = self.nodes_pruned);
    }

    pub fn take_best(&mut self) -> Option<Candidate> {
        self.best.take()
    }

    /// Whether a subtree bounded by `bound` is worth exploring.
    #[inline]
    pub fn can_improve(&self, bound: u32) -> bool {
        self.shared.can_improve(bound)
    }

    /// Offers the complete grouping in `working` as a new best.
    pub fn offer(&mut self, working: &WorkingPartition, problem: &SearchProblem) -> bool {
        if !self.shared.can_improve(working.successes()) {
            return false;
        }
        let candidate = Candidate {
            score: working.successes(),
            assignment: working.assignment().to_vec(),
        };
        self.offer_candidate(candidate, problem)
    }

    /// Offers a complete grouping as a new best.
    ///
    /// Kept only if it strictly beats the best score any shard has found.
    pub fn offer_candidate(&mut self, candidate: Candidate, problem: &SearchProblem) -> bool {
        if !self.shared.offer(candidate.score) {
            return false;
        }

        let total = problem.reserved().get() + candidate.score;
        debug!(
            event = "new_best",
            score = total,
            nodes = self.total_nodes(),
            elapsed_ms = self.elapsed().as_millis() as u64,
        );

        if let Some(sender) = self.shared.sender() {
            let improvement = Improvement {
                score: total.into(),
                groups: problem.partition_for(&candidate.assignment).into_groups(),
                elapsed: self.elapsed(),
                nodes_explored: self.total_nodes(),
            };
            // A dropped receiver just means nobody is listening any more.
            let _ = sender.send(improvement);
        }

        self.best = Some(candidate);
        true
    }
}
