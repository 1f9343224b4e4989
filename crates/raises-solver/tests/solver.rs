//! Solver lifecycle tests: budgets, cancellation and improvement streaming.

use std::thread;
use std::time::{Duration, Instant};

use raises_config::{ConstructionType, SolverConfig, ThreadCount};
use raises_core::{DiceSet, RaisesError, ScoringMode, Successes};
use raises_solver::{Solver, SolverHandle, TerminationReason};
use raises_test::{gap_roll, roll};
use tokio::sync::mpsc::unbounded_channel;

/// Sevens and sixes only pair up wastefully, so the best grouping sits far
/// below the root bound and the search cannot finish in any test budget.
fn endless_roll() -> DiceSet {
    let mut values = vec![7; 60];
    values.extend([6; 60]);
    roll(&values)
}

/// Waits until `handle` reports a running solve, then cancels it.
fn cancel_once_running(handle: &SolverHandle) -> bool {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !handle.is_solving() {
        if Instant::now() > deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(1));
    }
    handle.terminate_early();
    true
}

#[test]
fn test_cancel_before_solve_returns_incumbent() {
    let mut solver = Solver::default();
    let handle = solver.handle();
    let dice = gap_roll();

    handle.terminate_early();
    let result = solver.solve(&dice, ScoringMode::TensOnly).unwrap();

    assert!(result.timed_out);
    assert!(!result.exhaustive);
    assert_eq!(result.termination, TerminationReason::Cancelled);
    assert!(result.partition().covers(&dice));
    // Request is consumed by the solve.
    assert!(!handle.is_terminate_early_requested());
    assert!(!handle.is_solving());

    let again = solver.solve(&roll(&[6, 6, 6, 6]), ScoringMode::TensOnly).unwrap();
    assert!(again.exhaustive);
}

#[test]
fn test_zero_time_budget() {
    let mut solver = Solver::new(SolverConfig::new().with_time_limit(Duration::ZERO));
    let result = solver.solve(&gap_roll(), ScoringMode::TensOnly).unwrap();

    assert!(result.timed_out);
    assert_eq!(result.termination, TerminationReason::TimeLimit);
    // The construction heuristic still pairs the sixes.
    assert_eq!(result.score, Successes::of(12));
}

#[test]
fn test_zero_budget_without_construction_fails() {
    let mut solver = Solver::new(
        SolverConfig::new()
            .with_time_limit(Duration::ZERO)
            .with_construction(ConstructionType::None),
    );
    let err = solver.solve(&gap_roll(), ScoringMode::TensOnly).unwrap_err();
    assert!(matches!(err, RaisesError::SolverFailure(_)));
}

#[test]
fn test_fully_reduced_roll_is_exhaustive_even_without_budget() {
    let mut solver = Solver::new(SolverConfig::new().with_time_limit(Duration::ZERO));
    let result = solver.solve(&roll(&[10, 9, 1]), ScoringMode::TensOnly).unwrap();
    assert!(result.exhaustive);
    assert_eq!(result.score, Successes::of(2));
    assert_eq!(result.stats.searched_dice, 0);
}

#[test]
fn test_node_limit_reason() {
    let mut solver = Solver::new(SolverConfig::new().with_node_limit(50));
    let result = solver.solve(&gap_roll(), ScoringMode::TensOrFifteens).unwrap();
    assert_eq!(result.termination, TerminationReason::NodeLimit);
    assert_eq!(result.stats.nodes_explored, 50);
    assert_eq!(result.stats.shards, 1);
}

#[test]
fn test_improvements_are_streamed_in_order() {
    let (sender, mut receiver) = unbounded_channel();
    let dice = roll(&[7, 6, 5, 5, 4, 3, 3, 2, 2, 8]);
    let result = Solver::default()
        .solve_with_channel(&dice, ScoringMode::TensOrFifteens, sender)
        .unwrap();

    let mut scores = Vec::new();
    while let Ok(improvement) = receiver.try_recv() {
        scores.push(improvement.score);
    }
    assert!(!scores.is_empty());
    assert!(scores.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(scores.last(), Some(&result.score));
    assert_eq!(result.stats.improvements, scores.len() as u64);
}

#[test]
fn test_parallel_search_reports_shards() {
    let mut solver = Solver::new(SolverConfig::new().with_thread_count(ThreadCount::Count(3)));
    let dice = roll(&[8, 7, 6, 6, 5, 4, 4, 3, 2, 2, 2]);
    let result = solver.solve(&dice, ScoringMode::TensOnly).unwrap();
    let sequential = Solver::default().solve(&dice, ScoringMode::TensOnly).unwrap();

    assert!(result.stats.shards > 1);
    assert_eq!(result.score, sequential.score);
    assert!(result.exhaustive);
}

#[test]
fn test_result_serializes_to_json() {
    let result = Solver::default()
        .solve(&roll(&[9, 1, 4, 6]), ScoringMode::TensOnly)
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["score"], 2);
    assert_eq!(json["mode"], "tens_only");
    assert_eq!(json["timed_out"], false);
    assert!(json["elapsed_ms"].is_u64());
    assert!(json["termination"].is_string());
    assert_eq!(json["groups"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_cancel_mid_solve_from_another_thread() {
    let mut solver = Solver::new(SolverConfig::new().with_termination_seconds(60));
    let handle = solver.handle();
    let dice = endless_roll();

    let (result, cancelled) = thread::scope(|s| {
        let canceller = s.spawn(|| cancel_once_running(&handle));
        let result = solver.solve(&dice, ScoringMode::TensOnly).unwrap();
        (result, canceller.join().unwrap())
    });

    assert!(cancelled);
    assert_eq!(result.termination, TerminationReason::Cancelled);
    assert!(result.timed_out);
    assert!(!result.exhaustive);
    assert!(result.partition().covers(&dice));
    assert!(result.elapsed < Duration::from_secs(60));
    assert!(!handle.is_solving());
}

#[test]
fn test_cancelling_one_solver_leaves_another_alone() {
    let mut busy = Solver::new(SolverConfig::new().with_termination_seconds(60));
    let busy_handle = busy.handle();
    let mut other = Solver::default();
    let other_handle = other.handle();

    let (busy_result, other_results) = thread::scope(|s| {
        let running = s.spawn(|| busy.solve(&endless_roll(), ScoringMode::TensOnly).unwrap());
        assert!(cancel_once_running(&busy_handle));
        assert!(!other_handle.is_solving());

        let other_results: Vec<_> = (0..20)
            .map(|_| other.solve(&roll(&[9, 1, 6, 4]), ScoringMode::TensOnly).unwrap())
            .collect();
        (running.join().unwrap(), other_results)
    });

    assert_eq!(busy_result.termination, TerminationReason::Cancelled);
    for result in other_results {
        assert!(result.exhaustive);
        assert!(!result.timed_out);
        assert_eq!(result.score, Successes::of(2));
    }
}

#[test]
fn test_optimal_incumbent_is_not_reported_as_timed_out() {
    let mut solver = Solver::new(SolverConfig::new().with_time_limit(Duration::ZERO));
    let result = solver.solve(&roll(&[5, 5, 5]), ScoringMode::TensOrFifteens).unwrap();

    assert_eq!(result.termination, TerminationReason::OptimalBoundReached);
    assert!(!result.timed_out);
    assert!(result.exhaustive);
    assert_eq!(result.score, Successes::of(2));
}

#[test]
fn test_very_large_roll_within_budget() {
    let mut solver = Solver::new(SolverConfig::new().with_time_limit(Duration::from_millis(300)));
    let dice = roll(&[6; 20_000]);
    let result = solver.solve(&dice, ScoringMode::TensOnly).unwrap();

    assert!(result.partition().covers(&dice));
    assert_eq!(result.score, Successes::of(10_000));
    assert_eq!(result.termination, TerminationReason::TimeLimit);
}
