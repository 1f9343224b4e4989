//! Groups and partitions of a dice set.
//!
//! A [`Group`] holds dice by their position in the input [`DiceSet`], so two
//! dice showing the same face are still distinct members. A [`Partition`] is
//! an ordered list of groups covering every die exactly once.

use std::fmt;

use smallvec::SmallVec;

use crate::die::{DiceSet, Die};
use crate::error::{RaisesError, Result};
use crate::mode::{ScoringMode, MAX_GROUP_SUM};
use crate::score::Successes;

/// One die inside a group, remembered with its input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupMember {
    pub position: usize,
    pub die: Die,
}

/// A non-empty set of dice scored together.
///
/// Members are kept sorted by input position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    members: SmallVec<[GroupMember; 4]>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a group from `(position, die)` pairs.
    pub fn from_members(members: impl IntoIterator<Item = GroupMember>) -> Self {
        let mut group = Self::new();
        for member in members {
            group.push(member.position, member.die);
        }
        group
    }

    /// Adds a die, keeping members ordered by position.
    pub fn push(&mut self, position: usize, die: Die) {
        let at = self
            .members
            .iter()
            .position(|m| m.position > position)
            .unwrap_or(self.members.len());
        self.members.insert(at, GroupMember { position, die });
    }

    pub fn members(&self) -> &[GroupMember] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum of member face values.
    pub fn sum(&self) -> u32 {
        self.members.iter().map(|m| m.die.value() as u32).sum()
    }

    /// Face values in position order.
    pub fn values(&self) -> Vec<u8> {
        self.members.iter().map(|m| m.die.value()).collect()
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().map(|m| m.position)
    }

    /// Whether the group respects the sum limit.
    #[inline]
    pub fn is_within_limit(&self) -> bool {
        self.sum() <= MAX_GROUP_SUM
    }

    /// Successes for this group, or `None` if it breaks the sum limit.
    pub fn successes(&self, mode: ScoringMode) -> Option<Successes> {
        let sum = self.sum();
        if sum > MAX_GROUP_SUM {
            None
        } else {
            Some(Successes::of(mode.successes_for_sum(sum)))
        }
    }

    pub(crate) fn checked_successes(&self, index: usize, mode: ScoringMode) -> Result<Successes> {
        self.successes(mode)
            .ok_or_else(|| RaisesError::GroupLimitExceeded {
                group: index,
                sum: self.sum(),
            })
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member.die)?;
        }
        write!(f, "] = {}", self.sum())
    }
}

/// An ordered list of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    groups: Vec<Group>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Builds a partition from a 1-based group index per die.
    ///
    /// Indices must be consecutive: group `k` may only be used if every group
    /// below `k` is used too.
    ///
    /// ```
    /// use raises_core::{DiceSet, Partition};
    ///
    /// let dice = DiceSet::from_values([9, 4, 1, 6]).unwrap();
    /// let partition = Partition::from_assignment(&dice, &[1, 2, 1, 2]).unwrap();
    /// assert_eq!(partition.groups()[0].values(), vec![9, 1]);
    /// assert_eq!(partition.groups()[1].values(), vec![4, 6]);
    ///
    /// assert!(Partition::from_assignment(&dice, &[1, 3, 1, 3]).is_err());
    /// ```
    pub fn from_assignment(dice: &DiceSet, assignment: &[usize]) -> Result<Self> {
        if assignment.len() != dice.len() {
            return Err(RaisesError::InvalidAssignment(format!(
                "{} group indices for {} dice",
                assignment.len(),
                dice.len()
            )));
        }

        let group_count = assignment.iter().copied().max().unwrap_or(0);
        let mut groups = vec![Group::new(); group_count];
        for (position, &index) in assignment.iter().enumerate() {
            if index == 0 {
                return Err(RaisesError::InvalidAssignment(format!(
                    "die {} has group index 0; indices start at 1",
                    position
                )));
            }
            groups[index - 1].push(position, dice[position]);
        }

        if let Some(gap) = groups.iter().position(Group::is_empty) {
            return Err(RaisesError::InvalidAssignment(format!(
                "group {} is unused but group {} exists",
                gap + 1,
                group_count
            )));
        }

        Ok(Self { groups })
    }

    pub fn push(&mut self, group: Group) {
        self.groups.push(group);
    }

    pub fn extend(&mut self, groups: impl IntoIterator<Item = Group>) {
        self.groups.extend(groups);
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of dice across all groups.
    pub fn die_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Face values of each group.
    pub fn group_values(&self) -> Vec<Vec<u8>> {
        self.groups.iter().map(Group::values).collect()
    }

    /// Whether the groups use every die of `dice` exactly once, at its
    /// original position and with its original value, and no group is empty.
    pub fn covers(&self, dice: &DiceSet) -> bool {
        let mut seen = vec![false; dice.len()];
        for group in &self.groups {
            if group.is_empty() {
                return false;
            }
            for member in group.members() {
                if dice.get(member.position) != Some(member.die) || seen[member.position] {
                    return false;
                }
                seen[member.position] = true;
            }
        }
        seen.into_iter().all(|s| s)
    }
}

impl FromIterator<Group> for Partition {
    fn from_iter<I: IntoIterator<Item = Group>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}
