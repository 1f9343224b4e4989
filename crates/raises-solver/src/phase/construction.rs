//! Construction heuristic seeding the search incumbent.
//!
//! Opens each group with the largest die left and tops it up with the
//! smallest dice left until it reaches a target sum. Dice stranded in a
//! final group that never reached the first threshold are folded into
//! whichever group gains most from them.

use raises_core::{ScoringMode, FIFTEEN_THRESHOLD, MAX_GROUP_SUM, TEN_THRESHOLD};
use tracing::debug;

use crate::problem::{Candidate, SearchProblem};

/// Builds a complete grouping quickly, without search.
///
/// In fifteens mode both targets (10 and 15) are tried and the better
/// grouping is kept.
pub fn greedy_fill(problem: &SearchProblem) -> Candidate {
    let mut best = fill_to(problem, TEN_THRESHOLD);
    if problem.mode() == ScoringMode::TensOrFifteens {
        let fifteens = fill_to(problem, FIFTEEN_THRESHOLD);
        if fifteens.score > best.score {
            best = fifteens;
        }
    }
    debug!(event = "construction", score = best.score, dice = problem.len());
    best
}

fn fill_to(problem: &SearchProblem, target: u32) -> Candidate {
    let mode = problem.mode();
    let len = problem.len();
    let mut assignment = vec![0; len];
    let mut sums: Vec<u32> = Vec::new();

    let (mut largest, mut smallest_end) = (0, len);
    while largest < smallest_end {
        let group = sums.len();
        assignment[largest] = group;
        sums.push(problem.value(largest));
        largest += 1;

        while sums[group] < target && largest < smallest_end {
            let smallest = smallest_end - 1;
            let value = problem.value(smallest);
            if sums[group] + value > MAX_GROUP_SUM {
                break;
            }
            assignment[smallest] = group;
            sums[group] += value;
            smallest_end -= 1;
        }
    }

    if let Some(last) = sums.len().checked_sub(1) {
        if last > 0 && sums[last] < TEN_THRESHOLD {
            fold_leftovers(problem, &mut assignment, &mut sums, last);
        }
    }

    let score = sums.iter().map(|&sum| mode.successes_for_sum(sum)).sum();
    Candidate { score, assignment }
}

fn fold_leftovers(
    problem: &SearchProblem,
    assignment: &mut [usize],
    sums: &mut Vec<u32>,
    leftover: usize,
) {
    let mode = problem.mode();
    for depth in 0..assignment.len() {
        if assignment[depth] != leftover {
            continue;
        }
        let value = problem.value(depth);
        let mut target = None;
        let mut best_gain = 0;
        for (group, &sum) in sums[..leftover].iter().enumerate() {
            if sum + value > MAX_GROUP_SUM {
                continue;
            }
            let gain = mode.successes_for_sum(sum + value) - mode.successes_for_sum(sum);
            if target.is_none() || gain > best_gain {
                target = Some(group);
                best_gain = gain;
            }
        }
        if let Some(group) = target {
            assignment[depth] = group;
            sums[group] += value;
            sums[leftover] -= value;
        }
    }
    if sums[leftover] == 0 {
        sums.pop();
    }
}
