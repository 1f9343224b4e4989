//! Builds the caller-facing result from reduction and search output.

use std::time::Duration;

use raises_core::{score, Partition, RaisesError, Result, ScoringMode};

use crate::problem::{Candidate, SearchProblem};
use crate::reduction::Reduction;
use crate::result::SolveResult;
use crate::stats::SearchStats;
use crate::termination::TerminationReason;

/// Everything the search reports back for assembly.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub best: Option<Candidate>,
    pub termination: TerminationReason,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

/// Combines reserved groups with the best searched grouping.
///
/// Reserved groups come first, in the order the reduction found them. The
/// score is recomputed from the final groups, so a grouping that breaks the
/// sum limit can never be reported.
///
/// # Errors
///
/// [`RaisesError::SolverFailure`] if the search stopped before producing any
/// grouping; [`RaisesError::GroupLimitExceeded`] if a group breaks the limit.
pub fn assemble(
    reduction: Reduction,
    problem: &SearchProblem,
    mode: ScoringMode,
    report: SearchReport,
) -> Result<SolveResult> {
    let best = report.best.ok_or_else(|| {
        RaisesError::SolverFailure(format!(
            "search stopped ({}) before any grouping was found",
            report.termination
        ))
    })?;

    let mut groups = reduction.reserved.clone();
    groups.extend(problem.partition_for(&best.assignment).into_groups());
    let partition = Partition::from_groups(groups);
    let total = score(&partition, mode)?;
    debug_assert_eq!(total, reduction.reserved_score() + best.score.into());

    let timed_out = report.termination.is_early();
    Ok(SolveResult {
        mode,
        score: total,
        groups: partition.into_groups(),
        reserved_groups: reduction.is_reduced().then_some(reduction.reserved),
        timed_out,
        exhaustive: !timed_out,
        elapsed: report.elapsed,
        termination: report.termination,
        stats: report.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduction::reduce;
    use raises_core::{DiceSet, Successes};

    fn report(best: Option<Candidate>, termination: TerminationReason) -> SearchReport {
        SearchReport {
            best,
            termination,
            elapsed: Duration::from_millis(3),
            stats: SearchStats::default(),
        }
    }

    #[test]
    fn test_reserved_groups_come_first() {
        let dice = DiceSet::from_values([4, 10, 6]).unwrap();
        let reduction = reduce(&dice, ScoringMode::TensOnly);
        let problem = SearchProblem::new(
            &reduction.remaining,
            &reduction.positions,
            ScoringMode::TensOnly,
            reduction.reserved_score(),
        );
        let best = Candidate {
            score: 1,
            assignment: vec![0, 0],
        };

        let result = assemble(
            reduction,
            &problem,
            ScoringMode::TensOnly,
            report(Some(best), TerminationReason::Exhausted),
        )
        .unwrap();

        assert_eq!(result.score, Successes::of(2));
        assert_eq!(result.group_values(), vec![vec![10], vec![4, 6]]);
        assert_eq!(result.reserved_groups.as_ref().map(Vec::len), Some(1));
        assert!(result.partition().covers(&dice));
        assert!(result.exhaustive);
        assert!(!result.timed_out);
    }

    #[test]
    fn test_early_stop_marks_timed_out() {
        let dice = DiceSet::from_values([4, 3]).unwrap();
        let reduction = reduce(&dice, ScoringMode::TensOnly);
        let problem = SearchProblem::unreduced(&dice, ScoringMode::TensOnly);
        let best = Candidate {
            score: 0,
            assignment: vec![0, 1],
        };

        let result = assemble(
            reduction,
            &problem,
            ScoringMode::TensOnly,
            report(Some(best), TerminationReason::TimeLimit),
        )
        .unwrap();

        assert!(result.timed_out);
        assert!(!result.exhaustive);
        assert_eq!(result.reserved_groups, None);
    }

    #[test]
    fn test_missing_candidate_is_a_solver_failure() {
        let dice = DiceSet::from_values([4, 3]).unwrap();
        let problem = SearchProblem::unreduced(&dice, ScoringMode::TensOnly);

        let err = assemble(
            Reduction::identity(&dice),
            &problem,
            ScoringMode::TensOnly,
            report(None, TerminationReason::Cancelled),
        )
        .unwrap_err();

        assert!(matches!(err, RaisesError::SolverFailure(_)));
    }
}
