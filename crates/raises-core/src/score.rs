//! Successes - the objective being maximized

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::error::Result;
use crate::group::Partition;
use crate::mode::ScoringMode;

/// A count of successes (raises).
///
/// Higher is better. Successes are whole numbers and never negative.
///
/// # Examples
///
/// ```
/// use raises_core::Successes;
///
/// let a = Successes::of(2);
/// let b = Successes::ONE;
///
/// assert!(a > b);
/// assert_eq!(a + b, Successes::of(3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Successes(u32);

impl Successes {
    /// The zero score.
    pub const ZERO: Successes = Successes(0);

    /// A score of 1 (useful for incrementing).
    pub const ONE: Successes = Successes(1);

    #[inline]
    pub const fn of(count: u32) -> Self {
        Successes(count)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Add for Successes {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Successes(self.0 + other.0)
    }
}

impl AddAssign for Successes {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Successes {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Successes::ZERO, Add::add)
    }
}

impl From<u32> for Successes {
    fn from(count: u32) -> Self {
        Successes(count)
    }
}

impl fmt::Debug for Successes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successes({})", self.0)
    }
}

impl fmt::Display for Successes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 success")
        } else {
            write!(f, "{} successes", self.0)
        }
    }
}

/// Scores a partition under the given mode.
///
/// Any group over the sum limit makes the whole partition invalid, reported
/// as [`crate::RaisesError::GroupLimitExceeded`] rather than a low score.
/// An empty partition scores zero.
///
/// ```
/// use raises_core::{score, DiceSet, Partition, ScoringMode, Successes};
///
/// let dice = DiceSet::from_values([5, 5, 5]).unwrap();
/// let partition = Partition::from_assignment(&dice, &[1, 1, 1]).unwrap();
///
/// assert_eq!(score(&partition, ScoringMode::TensOnly).unwrap(), Successes::of(1));
/// assert_eq!(score(&partition, ScoringMode::TensOrFifteens).unwrap(), Successes::of(2));
/// ```
pub fn score(partition: &Partition, mode: ScoringMode) -> Result<Successes> {
    partition
        .groups()
        .iter()
        .enumerate()
        .map(|(index, group)| group.checked_successes(index + 1, mode))
        .sum()
}
