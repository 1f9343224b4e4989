//! Brute-force optimum.
//!
//! Enumerates every set partition of the dice as a restricted growth
//! string (die `i` joins one of the groups used so far, or the next new
//! one). Only usable for small rolls: the count of partitions grows as the
//! Bell numbers.

use raises_core::{DiceSet, Partition, ScoringMode, Successes, MAX_GROUP_SUM};

/// Best score over every valid partition of `dice`.
///
/// # Examples
///
/// ```
/// use raises_core::{DiceSet, ScoringMode, Successes};
/// use raises_test::brute_force_optimum;
///
/// let dice = DiceSet::from_values([5, 5, 5]).unwrap();
/// assert_eq!(brute_force_optimum(&dice, ScoringMode::TensOnly), Successes::of(1));
/// assert_eq!(brute_force_optimum(&dice, ScoringMode::TensOrFifteens), Successes::of(2));
/// ```
pub fn brute_force_optimum(dice: &DiceSet, mode: ScoringMode) -> Successes {
    let (score, _) = enumerate(dice, mode);
    Successes::of(score)
}

/// A partition achieving [`brute_force_optimum`] (the first one found).
pub fn brute_force_partition(dice: &DiceSet, mode: ScoringMode) -> Partition {
    let (_, assignment) = enumerate(dice, mode);
    let one_based: Vec<usize> = assignment.iter().map(|g| g + 1).collect();
    match Partition::from_assignment(dice, &one_based) {
        Ok(partition) => partition,
        Err(err) => panic!("oracle built an invalid assignment: {err}"),
    }
}

fn enumerate(dice: &DiceSet, mode: ScoringMode) -> (u32, Vec<usize>) {
    let values: Vec<u32> = dice.iter().map(|d| d.value() as u32).collect();
    let mut state = State {
        values: &values,
        mode,
        sums: Vec::new(),
        assignment: Vec::with_capacity(values.len()),
        best: 0,
        best_assignment: Vec::new(),
        found: false,
    };
    state.visit(0);
    (state.best, state.best_assignment)
}

struct State<'a> {
    values: &'a [u32],
    mode: ScoringMode,
    sums: Vec<u32>,
    assignment: Vec<usize>,
    best: u32,
    best_assignment: Vec<usize>,
    found: bool,
}

impl State<'_> {
    fn visit(&mut self, index: usize) {
        if index == self.values.len() {
            let score = self
                .sums
                .iter()
                .map(|&sum| self.mode.successes_for_sum(sum))
                .sum();
            if !self.found || score > self.best {
                self.found = true;
                self.best = score;
                self.best_assignment = self.assignment.clone();
            }
            return;
        }

        let value = self.values[index];
        for group in 0..=self.sums.len() {
            if group == self.sums.len() {
                self.sums.push(value);
            } else if self.sums[group] + value <= MAX_GROUP_SUM {
                self.sums[group] += value;
            } else {
                continue;
            }
            self.assignment.push(group);

            self.visit(index + 1);

            self.assignment.pop();
            if self.sums[group] == value && group + 1 == self.sums.len() {
                self.sums.pop();
            } else {
                self.sums[group] -= value;
            }
        }
    }
}
