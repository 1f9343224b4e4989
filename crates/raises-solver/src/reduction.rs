//! Pre-search reduction of guaranteed groups.
//!
//! In tens-only mode a lone 10 and a 9 paired with a 1 are each worth
//! exactly one success, and some optimal grouping always contains them as
//! they are. Reserving them up front shrinks the search without changing
//! the optimum. Fifteens mode never reduces: a 10 may be worth more topped
//! up to 15.

use raises_core::{DiceSet, Die, Group, GroupMember, ScoringMode, Successes};
use tracing::info;

/// Dice split into reserved groups and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Guaranteed groups, in the order they were found. Member positions
    /// refer to the original input.
    pub reserved: Vec<Group>,
    /// Dice left for the search.
    pub remaining: DiceSet,
    /// Original input position of each remaining die.
    pub positions: Vec<usize>,
}

impl Reduction {
    /// No dice reserved.
    pub fn identity(dice: &DiceSet) -> Self {
        Self {
            reserved: Vec::new(),
            remaining: dice.clone(),
            positions: (0..dice.len()).collect(),
        }
    }

    /// Successes locked in by the reserved groups.
    pub fn reserved_score(&self) -> Successes {
        Successes::of(self.reserved.len() as u32)
    }

    pub fn is_reduced(&self) -> bool {
        !self.reserved.is_empty()
    }
}

/// Reserves every lone 10 and every (9, 1) pair, repeating until neither is
/// left. Takes the earliest matching dice first.
///
/// Never applies outside [`ScoringMode::TensOnly`].
///
/// ```
/// use raises_core::{DiceSet, ScoringMode};
/// use raises_solver::reduce;
///
/// let dice = DiceSet::from_values([1, 10, 4, 9, 1]).unwrap();
/// let reduction = reduce(&dice, ScoringMode::TensOnly);
///
/// assert_eq!(reduction.reserved.len(), 2);
/// assert_eq!(reduction.remaining.values(), vec![4, 1]);
/// assert_eq!(reduction.positions, vec![2, 4]);
///
/// let untouched = reduce(&dice, ScoringMode::TensOrFifteens);
/// assert!(untouched.reserved.is_empty());
/// ```
pub fn reduce(dice: &DiceSet, mode: ScoringMode) -> Reduction {
    if mode != ScoringMode::TensOnly {
        return Reduction::identity(dice);
    }

    let mut available: Vec<(usize, Die)> = dice.iter().enumerate().collect();
    let mut reserved = Vec::new();

    loop {
        let mut found = false;

        if let Some(ten) = take_first(&mut available, 10) {
            reserved.push(Group::from_members([ten]));
            found = true;
        }

        if contains(&available, 9) && contains(&available, 1) {
            let pair = take_first(&mut available, 9)
                .into_iter()
                .chain(take_first(&mut available, 1));
            reserved.push(Group::from_members(pair));
            found = true;
        }

        if !found {
            break;
        }
    }

    if !reserved.is_empty() {
        info!(
            event = "reduction",
            reserved = reserved.len(),
            remaining = available.len(),
        );
    }

    let (positions, remaining): (Vec<usize>, Vec<Die>) = available.into_iter().unzip();
    Reduction {
        reserved,
        remaining: DiceSet::from(remaining),
        positions,
    }
}

fn contains(available: &[(usize, Die)], value: u8) -> bool {
    available.iter().any(|&(_, d)| d.value() == value)
}

fn take_first(available: &mut Vec<(usize, Die)>, value: u8) -> Option<GroupMember> {
    let index = available.iter().position(|&(_, d)| d.value() == value)?;
    let (position, die) = available.remove(index);
    Some(GroupMember { position, die })
}
