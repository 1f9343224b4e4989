//! The dice left for the search, in search order.

use raises_core::{DiceSet, Group, GroupMember, Partition, ScoringMode, Successes};

/// The dice the search must group, sorted for branching.
///
/// Dice are ordered by descending face value; ties keep input order so the
/// search is deterministic. Each die remembers its position in the caller's
/// original input, so groups built here never need remapping.
#[derive(Debug, Clone)]
pub struct SearchProblem {
    mode: ScoringMode,
    dice: Vec<GroupMember>,
    values: Vec<u32>,
    // remaining[d] is the pip total of dice d.. in search order
    remaining: Vec<u32>,
    reserved: Successes,
}

impl SearchProblem {
    /// Builds a problem over `dice`, where die `i` sits at `positions[i]` in
    /// the original input.
    pub fn new(
        dice: &DiceSet,
        positions: &[usize],
        mode: ScoringMode,
        reserved: Successes,
    ) -> Self {
        debug_assert_eq!(dice.len(), positions.len());

        let mut members: Vec<GroupMember> = dice
            .iter()
            .zip(positions)
            .map(|(die, &position)| GroupMember { position, die })
            .collect();
        members.sort_by(|a, b| {
            b.die
                .value()
                .cmp(&a.die.value())
                .then(a.position.cmp(&b.position))
        });

        let values: Vec<u32> = members.iter().map(|m| m.die.value() as u32).collect();
        let mut remaining = vec![0; values.len() + 1];
        for depth in (0..values.len()).rev() {
            remaining[depth] = remaining[depth + 1] + values[depth];
        }

        Self {
            mode,
            dice: members,
            values,
            remaining,
            reserved,
        }
    }

    /// A problem over the whole input with nothing reserved.
    pub fn unreduced(dice: &DiceSet, mode: ScoringMode) -> Self {
        let positions: Vec<usize> = (0..dice.len()).collect();
        Self::new(dice, &positions, mode, Successes::ZERO)
    }

    #[inline]
    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Face value of the die at `depth`.
    #[inline]
    pub fn value(&self, depth: usize) -> u32 {
        self.values[depth]
    }

    /// Pip total of the dice not yet placed at `depth`.
    #[inline]
    pub fn remaining_value(&self, depth: usize) -> u32 {
        self.remaining[depth]
    }

    /// Successes already locked in by the reduction pass.
    #[inline]
    pub fn reserved(&self) -> Successes {
        self.reserved
    }

    /// Builds groups from a 0-based group index per die in search order.
    pub fn partition_for(&self, assignment: &[usize]) -> Partition {
        let group_count = assignment.iter().map(|&g| g + 1).max().unwrap_or(0);
        let mut groups = vec![Group::new(); group_count];
        for (member, &group) in self.dice.iter().zip(assignment) {
            groups[group].push(member.position, member.die);
        }
        Partition::from_groups(groups)
    }
}

/// A complete grouping of the search dice and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Successes from the searched dice only.
    pub score: u32,
    /// 0-based group index per die, in search order.
    pub assignment: Vec<usize>,
}
