//! Exhaustive search phase using branch-and-bound.
//!
//! Dice are placed one at a time, largest first. Each die either joins an
//! open group or opens the next one, so group indices are always consecutive
//! and no grouping is visited under two labelings. On top of that:
//!
//! - among open groups with the same sum only the first is tried, since the
//!   resulting states are identical up to relabeling
//! - a die never joins a group already worth the most a group can score;
//!   opening a fresh group instead is never worse
//! - a subtree is pruned when its optimistic bound cannot beat the best
//!   score found so far
//!
//! The search stops early, still proven optimal, once the best score meets
//! the bound of the whole tree.

mod bounder;

use smallvec::SmallVec;

use crate::problem::{Candidate, SearchProblem};
use crate::scope::{SearchScope, SharedProgress};
use crate::termination::{Termination, TerminationReason};
use crate::working::WorkingPartition;

pub use bounder::{CoarseBounder, ConfiguredBounder, ScoreBounder, TightBounder};

/// Result of exploring one subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Optimal,
    Stopped(TerminationReason),
}

/// What one depth-first run found.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Best candidate this run found that beat the shared incumbent.
    pub best: Option<Candidate>,
    /// Set when a termination condition cut the run short.
    pub stopped: Option<TerminationReason>,
    /// Set when the run ended because the root bound was met.
    pub optimal_bound_reached: bool,
    pub nodes_explored: u64,
    pub nodes_pruned: u64,
}

/// Depth-first branch-and-bound over a [`SearchProblem`].
#[derive(Debug)]
pub struct ExhaustiveSearch<'p, B, T> {
    problem: &'p SearchProblem,
    bounder: B,
    termination: &'p T,
    enable_pruning: bool,
}

impl<'p, B, T> ExhaustiveSearch<'p, B, T>
where
    B: ScoreBounder,
    T: Termination,
{
    pub fn new(problem: &'p SearchProblem, bounder: B, termination: &'p T) -> Self {
        Self {
            problem,
            bounder,
            termination,
            enable_pruning: true,
        }
    }

    /// Turns bound pruning and the early optimal stop on or off.
    ///
    /// With pruning off every canonical grouping is visited.
    pub fn with_pruning(mut self, enable_pruning: bool) -> Self {
        self.enable_pruning = enable_pruning;
        self
    }

    pub fn problem(&self) -> &'p SearchProblem {
        self.problem
    }

    /// Upper bound on the search score of the whole tree.
    pub fn root_bound(&self) -> u32 {
        let working = WorkingPartition::new(self.problem.mode(), self.problem.len());
        self.bounder
            .optimistic_bound(&working, self.problem.remaining_value(0))
    }

    /// Searches the whole tree.
    pub fn run(&self, shared: &SharedProgress) -> SearchOutcome {
        self.run_from(&[], shared)
    }

    /// Searches the subtree below the first dice already placed as
    /// `prefix` (0-based group index per die in search order).
    pub fn run_from(&self, prefix: &[usize], shared: &SharedProgress) -> SearchOutcome {
        let mut working = WorkingPartition::new(self.problem.mode(), self.problem.len());
        for (depth, &group) in prefix.iter().enumerate() {
            working.assign(group, self.problem.value(depth));
        }

        let mut scope = SearchScope::new(shared);
        let flow = self.explore(&mut working, &mut scope, prefix.len());
        scope.flush();

        SearchOutcome {
            stopped: match flow {
                Flow::Stopped(reason) => Some(reason),
                _ => None,
            },
            optimal_bound_reached: flow == Flow::Optimal,
            nodes_explored: scope.nodes_explored(),
            nodes_pruned: scope.nodes_pruned(),
            best: scope.take_best(),
        }
    }

    /// Depth-first walk from `start_depth`, keeping one frame per open
    /// branch on the heap so deep rolls cannot exhaust the thread stack.
    fn explore(
        &self,
        working: &mut WorkingPartition,
        scope: &mut SearchScope<'_>,
        start_depth: usize,
    ) -> Flow {
        let root = match self.visit(working, scope, start_depth) {
            Visit::Leaf => return Flow::Continue,
            Visit::Stop(flow) => return flow,
            Visit::Branch(frame) => frame,
        };

        let mut stack = vec![root];
        loop {
            let depth = start_depth + stack.len();
            let Some(frame) = stack.last_mut() else {
                return Flow::Continue;
            };
            if frame.next > 0 {
                working.undo(frame.value);
            }
            let Some(&group) = frame.children.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            working.assign(group, frame.value);

            match self.visit(working, scope, depth) {
                Visit::Leaf => {}
                Visit::Branch(child) => stack.push(child),
                Visit::Stop(flow) => {
                    // Every frame still holds the die it placed last.
                    for frame in stack.iter().rev() {
                        working.undo(frame.value);
                    }
                    return flow;
                }
            }
        }
    }

    /// Enters the node at `depth`: stops, closes it, or opens its children.
    fn visit(
        &self,
        working: &WorkingPartition,
        scope: &mut SearchScope<'_>,
        depth: usize,
    ) -> Visit {
        // A proven optimum is final even when the budget ran out with it.
        if self.enable_pruning && scope.shared().is_optimal() {
            return Visit::Stop(Flow::Optimal);
        }
        if let Some(reason) = self.termination.check(scope) {
            return Visit::Stop(Flow::Stopped(reason));
        }
        scope.record_node();

        if depth == self.problem.len() {
            scope.offer(working, self.problem);
            return Visit::Leaf;
        }

        if self.enable_pruning {
            let bound = self
                .bounder
                .optimistic_bound(working, self.problem.remaining_value(depth));
            if !scope.can_improve(bound) {
                scope.record_prune();
                return Visit::Leaf;
            }
        }

        let value = self.problem.value(depth);
        Visit::Branch(Frame {
            value,
            children: candidate_groups(working, value),
            next: 0,
        })
    }
}

/// What entering one node led to.
enum Visit {
    /// Nothing below to explore: a complete grouping or a pruned subtree.
    Leaf,
    Branch(Frame),
    Stop(Flow),
}

/// An open node on the explicit search stack.
struct Frame {
    /// Value of the die placed at this depth.
    value: u32,
    children: SmallVec<[usize; 16]>,
    /// Index of the next child to try.
    next: usize,
}

/// Groups worth trying for the next die, ending with a fresh group.
pub(crate) fn candidate_groups(working: &WorkingPartition, value: u32) -> SmallVec<[usize; 16]> {
    let mut groups = SmallVec::new();
    let mut tried_sums: SmallVec<[u32; 16]> = SmallVec::new();
    for (group, &sum) in working.sums().iter().enumerate() {
        if !working.fits(group, value) || working.is_capped(group) || tried_sums.contains(&sum) {
            continue;
        }
        tried_sums.push(sum);
        groups.push(group);
    }
    groups.push(working.group_count());
    groups
}
