//! Property-based tests for the solver.

use proptest::prelude::*;

use raises_config::{ConstructionType, SolverConfig, ThreadCount};
use raises_core::{score, ScoringMode};
use raises_solver::Solver;
use raises_test::{brute_force_optimum, dice_set, mode, small_dice_set};

fn solver(config: SolverConfig) -> Solver {
    Solver::new(config.with_termination_seconds(60))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    // 1. The solver finds the brute-force optimum
    #[test]
    fn matches_brute_force(dice in small_dice_set(), mode in mode()) {
        let result = solver(SolverConfig::new()).solve(&dice, mode).unwrap();
        prop_assert!(result.exhaustive);
        prop_assert_eq!(result.score, brute_force_optimum(&dice, mode), "dice={}", dice);
    }

    // 2. Groups cover every die once, respect the limit and score as reported
    #[test]
    fn result_is_a_valid_partition(dice in dice_set(12), mode in mode()) {
        let result = solver(SolverConfig::new()).solve(&dice, mode).unwrap();
        let partition = result.partition();
        prop_assert!(partition.covers(&dice));
        prop_assert!(result.groups.iter().all(|g| g.is_within_limit()));
        prop_assert_eq!(score(&partition, mode).unwrap(), result.score);
    }

    // 3. Reduction never changes the optimum
    #[test]
    fn reduction_preserves_optimum(dice in small_dice_set()) {
        let reduced = solver(SolverConfig::new()).solve(&dice, ScoringMode::TensOnly).unwrap();
        let full = solver(SolverConfig::new().with_reduction(false))
            .solve(&dice, ScoringMode::TensOnly)
            .unwrap();
        prop_assert_eq!(reduced.score, full.score);
        prop_assert!(full.reserved_groups.is_none());
    }

    // 4. Fifteens mode never reserves groups
    #[test]
    fn fifteens_never_reduces(dice in dice_set(12)) {
        let result = solver(SolverConfig::new()).solve(&dice, ScoringMode::TensOrFifteens).unwrap();
        prop_assert!(result.reserved_groups.is_none());
    }

    // 5. Reserved groups come first and each is worth exactly one success
    #[test]
    fn reserved_groups_lead(dice in dice_set(12)) {
        let result = solver(SolverConfig::new()).solve(&dice, ScoringMode::TensOnly).unwrap();
        if let Some(reserved) = &result.reserved_groups {
            prop_assert!(!reserved.is_empty());
            prop_assert_eq!(&result.groups[..reserved.len()], &reserved[..]);
            for group in reserved {
                let values = group.values();
                prop_assert!(values == vec![10] || values == vec![9, 1] || values == vec![1, 9]);
            }
        }
    }

    // 6. The score never exceeds what the total pip value allows
    #[test]
    fn score_within_value_bound(dice in dice_set(12), mode in mode()) {
        let result = solver(SolverConfig::new()).solve(&dice, mode).unwrap();
        prop_assert!(result.score.get() <= mode.max_successes_for_value(dice.total_value()));
    }

    // 7. Allowing fifteens never scores lower
    #[test]
    fn fifteens_at_least_tens(dice in small_dice_set()) {
        let tens = solver(SolverConfig::new()).solve(&dice, ScoringMode::TensOnly).unwrap();
        let fifteens = solver(SolverConfig::new()).solve(&dice, ScoringMode::TensOrFifteens).unwrap();
        prop_assert!(fifteens.score >= tens.score);
    }

    // 8. A larger node budget never gives a worse score
    #[test]
    fn monotone_in_node_budget(
        dice in dice_set(16),
        mode in mode(),
        small in 1..200u64,
        extra in 0..2000u64,
    ) {
        let a = solver(SolverConfig::new().with_node_limit(small)).solve(&dice, mode).unwrap();
        let b = solver(SolverConfig::new().with_node_limit(small + extra)).solve(&dice, mode).unwrap();
        prop_assert!(a.score <= b.score);
        prop_assert_eq!(a.timed_out, !a.exhaustive);
    }

    // 9. Solving is deterministic
    #[test]
    fn deterministic(dice in dice_set(12), mode in mode()) {
        let a = solver(SolverConfig::new()).solve(&dice, mode).unwrap();
        let b = solver(SolverConfig::new()).solve(&dice, mode).unwrap();
        prop_assert_eq!(a.groups, b.groups);
        prop_assert_eq!(a.score, b.score);
    }

    // 10. Parallel search reaches the same optimum
    #[test]
    fn parallel_matches_sequential(dice in small_dice_set(), mode in mode()) {
        let sequential = solver(SolverConfig::new()).solve(&dice, mode).unwrap();
        let parallel = solver(SolverConfig::new().with_thread_count(ThreadCount::Count(4)))
            .solve(&dice, mode)
            .unwrap();
        prop_assert!(parallel.exhaustive);
        prop_assert_eq!(parallel.score, sequential.score);
        prop_assert!(parallel.partition().covers(&dice));
    }

    // 11. Without construction an unbudgeted search still finds the optimum
    #[test]
    fn no_construction_still_optimal(dice in small_dice_set(), mode in mode()) {
        let result = solver(SolverConfig::new().with_construction(ConstructionType::None))
            .solve(&dice, mode)
            .unwrap();
        prop_assert_eq!(result.score, brute_force_optimum(&dice, mode));
    }
}
