//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use raises_core::Successes;

use super::*;
use crate::scope::{SearchScope, SharedProgress};

#[test]
fn test_zero_time_limit_terminates_immediately() {
    let shared = SharedProgress::new(0, Successes::ZERO);
    let scope = SearchScope::new(&shared);
    assert_eq!(
        TimeTermination::new(Duration::ZERO).check(&scope),
        Some(TerminationReason::TimeLimit)
    );
    assert!(!TimeTermination::seconds(60).is_terminated(&scope));
}

#[test]
fn test_node_count() {
    let shared = SharedProgress::new(0, Successes::ZERO);
    let mut scope = SearchScope::new(&shared);
    let termination = NodeCountTermination::new(3);

    for _ in 0..3 {
        assert!(!termination.is_terminated(&scope));
        scope.record_node();
    }
    assert_eq!(termination.check(&scope), Some(TerminationReason::NodeLimit));
}

#[test]
fn test_external_flag() {
    let shared = SharedProgress::new(0, Successes::ZERO);
    let scope = SearchScope::new(&shared);
    let flag = Arc::new(AtomicBool::new(false));
    let termination = ExternalTermination::new(Arc::clone(&flag));

    assert!(!termination.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert_eq!(termination.check(&scope), Some(TerminationReason::Cancelled));
}

#[test]
fn test_or_reports_first_triggered_reason() {
    let shared = SharedProgress::new(0, Successes::ZERO);
    let scope = SearchScope::new(&shared);
    let flag = Arc::new(AtomicBool::new(true));

    let termination = OrTermination((
        ExternalTermination::new(flag),
        TimeTermination::new(Duration::ZERO),
    ));
    assert_eq!(termination.check(&scope), Some(TerminationReason::Cancelled));

    let termination = OrTermination((
        TimeTermination::seconds(60),
        NodeCountTermination::new(0),
    ));
    assert_eq!(termination.check(&scope), Some(TerminationReason::NodeLimit));
}

#[test]
fn test_absent_condition_never_terminates() {
    let shared = SharedProgress::new(0, Successes::ZERO);
    let scope = SearchScope::new(&shared);
    let none: Option<NodeCountTermination> = None;
    assert!(!none.is_terminated(&scope));
    assert!(Some(NodeCountTermination::new(0)).is_terminated(&scope));
}

#[test]
fn test_early_reasons() {
    assert!(!TerminationReason::Exhausted.is_early());
    assert!(!TerminationReason::OptimalBoundReached.is_early());
    assert!(TerminationReason::TimeLimit.is_early());
    assert!(TerminationReason::NodeLimit.is_early());
    assert!(TerminationReason::Cancelled.is_early());
    assert_eq!(TerminationReason::NodeLimit.to_string(), "node limit");
}
