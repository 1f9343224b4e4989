//! Die and DiceSet - validated roll values

use std::fmt;
use std::ops::Index;

use crate::error::{RaisesError, Result};

/// Lowest face on a die.
pub const MIN_FACE: u8 = 1;

/// Highest face on a die.
pub const MAX_FACE: u8 = 10;

/// A single rolled die, guaranteed to hold a value in `1..=10`.
///
/// # Examples
///
/// ```
/// use raises_core::Die;
///
/// let die = Die::new(7).unwrap();
/// assert_eq!(die.value(), 7);
/// assert!(Die::new(11).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "u8")
)]
pub struct Die(u8);

impl Die {
    /// Creates a die, rejecting values outside `1..=10`.
    pub fn new(value: i64) -> Result<Self> {
        if (MIN_FACE as i64..=MAX_FACE as i64).contains(&value) {
            Ok(Die(value as u8))
        } else {
            Err(RaisesError::InvalidDieValue { value })
        }
    }

    /// Returns the face value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Die {
    type Error = RaisesError;

    fn try_from(value: i64) -> Result<Self> {
        Die::new(value)
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> u8 {
        die.0
    }
}

impl fmt::Debug for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Die({})", self.0)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered multiset of dice.
///
/// The order is the caller's display order. It has no effect on scoring but
/// every position is kept so groups can be mapped back to the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    /// Creates a dice set from already validated dice.
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    /// Validates raw values into a dice set.
    ///
    /// Fails on the first value outside `1..=10`.
    ///
    /// ```
    /// use raises_core::DiceSet;
    ///
    /// let dice = DiceSet::from_values([10, 9, 1]).unwrap();
    /// assert_eq!(dice.total_value(), 20);
    /// assert!(DiceSet::from_values([0, 4]).is_err());
    /// ```
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Result<Self> {
        let dice = values
            .into_iter()
            .map(Die::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { dice })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<Die> {
        self.dice.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Die> + '_ {
        self.dice.iter().copied()
    }

    pub fn as_slice(&self) -> &[Die] {
        &self.dice
    }

    /// Sum of all face values.
    pub fn total_value(&self) -> u32 {
        self.dice.iter().map(|d| d.value() as u32).sum()
    }

    /// Face values in display order.
    pub fn values(&self) -> Vec<u8> {
        self.dice.iter().map(|d| d.value()).collect()
    }
}

impl Index<usize> for DiceSet {
    type Output = Die;

    fn index(&self, position: usize) -> &Die {
        &self.dice[position]
    }
}

impl FromIterator<Die> for DiceSet {
    fn from_iter<I: IntoIterator<Item = Die>>(iter: I) -> Self {
        Self {
            dice: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Die>> for DiceSet {
    fn from(dice: Vec<Die>) -> Self {
        Self::new(dice)
    }
}

impl fmt::Display for DiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, die) in self.dice.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", die)?;
        }
        write!(f, "]")
    }
}
