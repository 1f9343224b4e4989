//! Tests for search scopes.

use raises_core::{DiceSet, ScoringMode, Successes};
use tokio::sync::mpsc::unbounded_channel;

use super::*;
use crate::problem::{Candidate, SearchProblem};
use crate::working::WorkingPartition;

#[test]
fn test_shared_best_only_rises() {
    let shared = SharedProgress::new(3, Successes::ZERO);
    assert_eq!(shared.best_score(), None);
    assert!(shared.can_improve(0));

    assert!(shared.offer(1));
    assert!(!shared.offer(1));
    assert!(!shared.offer(0));
    assert!(shared.offer(2));
    assert_eq!(shared.best_score(), Some(2));
    assert_eq!(shared.improvements(), 2);

    assert!(!shared.can_improve(2));
    assert!(shared.can_improve(3));
    assert!(!shared.is_optimal());
    shared.offer(3);
    assert!(shared.is_optimal());
}

#[test]
fn test_node_counts_flush_to_shared() {
    let shared = SharedProgress::new(0, Successes::ZERO);
    let mut scope = SearchScope::new(&shared);
    for _ in 0..1500 {
        scope.record_node();
    }
    assert_eq!(scope.nodes_explored(), 1500);
    assert_eq!(scope.total_nodes(), 1500);
    assert_eq!(shared.nodes(), 1024);

    scope.flush();
    assert_eq!(shared.nodes(), 1500);
    assert_eq!(scope.total_nodes(), 1500);
}

#[test]
fn test_offer_streams_improvements_with_reserved_score() {
    let dice = DiceSet::from_values([6, 4, 3]).unwrap();
    let problem = SearchProblem::new(&dice, &[0, 2, 3], ScoringMode::TensOnly, Successes::ONE);
    let (sender, mut receiver) = unbounded_channel();
    let shared = SharedProgress::new(2, problem.reserved()).with_sender(sender);
    let mut scope = SearchScope::new(&shared);

    let mut working = WorkingPartition::new(ScoringMode::TensOnly, 3);
    working.assign(0, 6);
    working.assign(0, 4);
    working.assign(1, 3);
    assert!(scope.offer(&working, &problem));
    // Same score again is not an improvement.
    assert!(!scope.offer(&working, &problem));

    let improvement = receiver.try_recv().unwrap();
    assert_eq!(improvement.score, Successes::of(2));
    assert_eq!(improvement.groups.len(), 2);
    assert_eq!(improvement.groups[0].values(), vec![6, 4]);
    assert!(receiver.try_recv().is_err());

    assert_eq!(
        scope.take_best(),
        Some(Candidate {
            score: 1,
            assignment: vec![0, 0, 1],
        })
    );
}

#[test]
fn test_dropped_receiver_is_ignored() {
    let dice = DiceSet::from_values([10]).unwrap();
    let problem = SearchProblem::unreduced(&dice, ScoringMode::TensOnly);
    let (sender, receiver) = unbounded_channel();
    drop(receiver);
    let shared = SharedProgress::new(1, Successes::ZERO).with_sender(sender);
    let mut scope = SearchScope::new(&shared);

    let candidate = Candidate {
        score: 1,
        assignment: vec![0],
    };
    assert!(scope.offer_candidate(candidate, &problem));
    assert!(shared.is_optimal());
}
