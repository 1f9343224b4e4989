//! Solver entry points.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use raises_config::{ConstructionType, SolverConfig};
use raises_core::{DiceSet, Result, ScoringMode};
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

use crate::assembler::{assemble, SearchReport};
use crate::event::Improvement;
use crate::phase::construction::greedy_fill;
use crate::phase::exhaustive::{ConfiguredBounder, ExhaustiveSearch};
use crate::phase::partitioned::PartitionedSearch;
use crate::problem::{Candidate, SearchProblem};
use crate::realtime::SolverHandle;
use crate::reduction::{reduce, Reduction};
use crate::result::SolveResult;
use crate::scope::{SearchScope, SharedProgress};
use crate::stats::SearchStats;
use crate::termination::{
    ExternalTermination, NodeCountTermination, OrTermination, TerminationReason, TimeTermination,
};

/// Finds the grouping of a dice roll with the most successes.
///
/// A solver can be reused for any number of solves, one at a time: solving
/// borrows it mutably, so its [`SolverHandle`] always refers to a single
/// running solve. Each solve runs the reduction pass (tens-only mode),
/// seeds an incumbent with the construction heuristic, then runs
/// branch-and-bound within the configured budget.
///
/// # Examples
///
/// ```
/// use raises_core::{DiceSet, ScoringMode, Successes};
/// use raises_solver::Solver;
///
/// let dice = DiceSet::from_values([9, 1, 6, 4]).unwrap();
/// let result = Solver::default().solve(&dice, ScoringMode::TensOnly).unwrap();
///
/// assert_eq!(result.score, Successes::of(2));
/// assert!(result.exhaustive);
/// ```
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    solving: Arc<AtomicBool>,
    terminate_early_flag: Arc<AtomicBool>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            solving: Arc::new(AtomicBool::new(false)),
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// A handle that can stop this solver's solves from another thread.
    pub fn handle(&self) -> SolverHandle {
        SolverHandle::new(
            Arc::clone(&self.solving),
            Arc::clone(&self.terminate_early_flag),
        )
    }

    /// Requests early termination of the running (or next) solve.
    pub fn terminate_early(&self) {
        self.terminate_early_flag.store(true, Ordering::SeqCst);
    }

    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    /// Solves `dice` under `mode`.
    ///
    /// # Errors
    ///
    /// [`raises_core::RaisesError::SolverFailure`] if the search was stopped
    /// before any grouping existed, which only happens with construction
    /// disabled.
    pub fn solve(&mut self, dice: &DiceSet, mode: ScoringMode) -> Result<SolveResult> {
        self.run(dice, mode, None)
    }

    /// Solves `dice` under `mode`, sending every strict improvement of the
    /// best grouping to `sender` as it is found.
    pub fn solve_with_channel(
        &mut self,
        dice: &DiceSet,
        mode: ScoringMode,
        sender: UnboundedSender<Improvement>,
    ) -> Result<SolveResult> {
        self.run(dice, mode, Some(sender))
    }

    fn run(
        &mut self,
        dice: &DiceSet,
        mode: ScoringMode,
        sender: Option<UnboundedSender<Improvement>>,
    ) -> Result<SolveResult> {
        let start = Instant::now();
        if dice.is_empty() {
            self.terminate_early_flag.store(false, Ordering::SeqCst);
            info!(event = "solve_end", score = 0, exhaustive = true, timed_out = false);
            return Ok(SolveResult::empty(mode));
        }

        let _solving = SolvingGuard::start(&self.solving, &self.terminate_early_flag);
        let time_limit = self.config.effective_time_limit();
        let thread_count = self.config.search.thread_count.resolve();
        info!(
            event = "solve_start",
            dice = dice.len(),
            mode = %mode,
            time_limit_ms = time_limit.as_millis() as u64,
            threads = thread_count,
        );

        let reduction = if self.config.reduction.enabled {
            reduce(dice, mode)
        } else {
            Reduction::identity(dice)
        };
        let problem = SearchProblem::new(
            &reduction.remaining,
            &reduction.positions,
            mode,
            reduction.reserved_score(),
        );

        let termination = OrTermination((
            ExternalTermination::new(Arc::clone(&self.terminate_early_flag)),
            TimeTermination::new(time_limit),
            self.config.node_limit().map(NodeCountTermination::new),
        ));
        let search = ExhaustiveSearch::new(
            &problem,
            ConfiguredBounder::from(self.config.search.bounder_type),
            &termination,
        )
        .with_pruning(self.config.search.enable_pruning);

        let root_bound = search.root_bound();
        let mut shared = SharedProgress::started_at(start, root_bound, problem.reserved());
        if let Some(sender) = sender {
            shared = shared.with_sender(sender);
        }

        let report = if problem.is_empty() {
            shared.offer(0);
            SearchReport {
                best: Some(Candidate {
                    score: 0,
                    assignment: Vec::new(),
                }),
                termination: TerminationReason::Exhausted,
                elapsed: start.elapsed(),
                stats: SearchStats {
                    improvements: shared.improvements(),
                    ..SearchStats::default()
                },
            }
        } else {
            let mut best = match self.config.search.construction_type {
                ConstructionType::GreedyFill => {
                    let mut scope = SearchScope::new(&shared);
                    scope.offer_candidate(greedy_fill(&problem), &problem);
                    scope.take_best()
                }
                ConstructionType::None => None,
            };

            let outcomes = PartitionedSearch::new(search, thread_count).run(&shared);

            let mut stats = SearchStats {
                searched_dice: problem.len(),
                shards: outcomes.len(),
                root_bound,
                ..SearchStats::default()
            };
            let mut stopped = None;
            let mut optimal = false;
            for outcome in outcomes {
                stats.nodes_explored += outcome.nodes_explored;
                stats.nodes_pruned += outcome.nodes_pruned;
                stopped = stopped.or(outcome.stopped);
                optimal |= outcome.optimal_bound_reached;
                if let Some(candidate) = outcome.best {
                    if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                        best = Some(candidate);
                    }
                }
            }
            stats.improvements = shared.improvements();

            let termination = match stopped {
                Some(reason) => reason,
                None if optimal => TerminationReason::OptimalBoundReached,
                None => TerminationReason::Exhausted,
            };
            SearchReport {
                best,
                termination,
                elapsed: start.elapsed(),
                stats,
            }
        };

        let result = assemble(reduction, &problem, mode, report)?;
        info!(
            event = "solve_end",
            score = result.score.get(),
            exhaustive = result.exhaustive,
            timed_out = result.timed_out,
            termination = %result.termination,
            nodes = result.stats.nodes_explored,
            elapsed_ms = result.elapsed.as_millis() as u64,
        );
        Ok(result)
    }
}

/// Marks a solve as running and clears any termination request once the
/// solve ends, however it ends.
struct SolvingGuard<'a> {
    solving: &'a AtomicBool,
    terminate_early: &'a AtomicBool,
}

impl<'a> SolvingGuard<'a> {
    fn start(solving: &'a AtomicBool, terminate_early: &'a AtomicBool) -> Self {
        solving.store(true, Ordering::SeqCst);
        Self {
            solving,
            terminate_early,
        }
    }
}

impl Drop for SolvingGuard<'_> {
    fn drop(&mut self) {
        self.terminate_early.store(false, Ordering::SeqCst);
        self.solving.store(false, Ordering::SeqCst);
    }
}

/// Solves `dice` under `mode` with the default configuration.
///
/// ```
/// use raises_core::{DiceSet, ScoringMode, Successes};
///
/// let dice = DiceSet::from_values([5, 5, 5]).unwrap();
/// let result = raises_solver::solve(&dice, ScoringMode::TensOrFifteens).unwrap();
/// assert_eq!(result.score, Successes::of(2));
/// assert_eq!(result.group_values(), vec![vec![5, 5, 5]]);
/// ```
pub fn solve(dice: &DiceSet, mode: ScoringMode) -> Result<SolveResult> {
    Solver::default().solve(dice, mode)
}

/// Validates raw die values, then solves with the default configuration.
///
/// # Errors
///
/// [`raises_core::RaisesError::InvalidDieValue`] for the first value outside
/// 1..=10; nothing is searched in that case.
///
/// ```
/// use raises_core::{RaisesError, ScoringMode};
///
/// let err = raises_solver::solve_values([4, 11, 2], ScoringMode::TensOnly).unwrap_err();
/// assert_eq!(err, RaisesError::InvalidDieValue { value: 11 });
/// ```
pub fn solve_values(
    values: impl IntoIterator<Item = i64>,
    mode: ScoringMode,
) -> Result<SolveResult> {
    let dice = DiceSet::from_values(values)?;
    solve(&dice, mode)
}
