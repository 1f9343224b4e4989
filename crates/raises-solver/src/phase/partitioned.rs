//! Parallel search over independent subtrees.
//!
//! The top of the tree is expanded breadth-first until there are enough
//! subtrees to keep every thread busy. Each subtree is then searched
//! depth-first on a rayon pool. Shards prune against one shared incumbent
//! score, so a good grouping found by one shard speeds up all the others.

use rayon::prelude::*;
use tracing::debug;

use super::exhaustive::{candidate_groups, ExhaustiveSearch, ScoreBounder, SearchOutcome};
use crate::problem::SearchProblem;
use crate::scope::SharedProgress;
use crate::termination::Termination;
use crate::working::WorkingPartition;

// Subtrees per thread, so uneven shards still balance.
const SHARDS_PER_THREAD: usize = 8;

/// Runs an [`ExhaustiveSearch`] split across `thread_count` threads.
#[derive(Debug)]
pub struct PartitionedSearch<'p, B, T> {
    search: ExhaustiveSearch<'p, B, T>,
    thread_count: usize,
}

impl<'p, B, T> PartitionedSearch<'p, B, T>
where
    B: ScoreBounder,
    T: Termination,
{
    pub fn new(search: ExhaustiveSearch<'p, B, T>, thread_count: usize) -> Self {
        Self {
            search,
            thread_count: thread_count.max(1),
        }
    }

    /// Searches every shard and returns their outcomes in shard order.
    ///
    /// Falls back to a single in-thread run when there is only one thread.
    pub fn run(&self, shared: &SharedProgress) -> Vec<SearchOutcome> {
        if self.thread_count == 1 {
            return vec![self.search.run(shared)];
        }

        let prefixes = frontier(
            self.search.problem(),
            self.thread_count * SHARDS_PER_THREAD,
        );
        debug!(
            event = "shards",
            shards = prefixes.len(),
            threads = self.thread_count,
        );

        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count)
            .build()
        {
            Ok(pool) => pool,
            Err(err) => {
                debug!(event = "shards_fallback", error = %err);
                return vec![self.search.run(shared)];
            }
        };

        pool.install(|| {
            prefixes
                .par_iter()
                .map(|prefix| self.search.run_from(prefix, shared))
                .collect()
        })
    }
}

/// Expands the tree breadth-first into at least `target` subtree roots,
/// or until every die is placed.
///
/// Uses the same branching rules as the depth-first search, so the
/// subtrees together cover exactly the canonical groupings.
pub fn frontier(problem: &SearchProblem, target: usize) -> Vec<Vec<usize>> {
    let mut level: Vec<Vec<usize>> = vec![Vec::new()];
    for depth in 0..problem.len() {
        if level.len() >= target {
            break;
        }
        let value = problem.value(depth);
        let mut next = Vec::with_capacity(level.len() * 2);
        for prefix in &level {
            let mut working = WorkingPartition::new(problem.mode(), problem.len());
            for (d, &group) in prefix.iter().enumerate() {
                working.assign(group, problem.value(d));
            }
            for group in candidate_groups(&working, value) {
                let mut child = prefix.clone();
                child.push(group);
                next.push(child);
            }
        }
        level = next;
    }
    level
}
