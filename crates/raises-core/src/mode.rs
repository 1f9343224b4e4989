//! Scoring rules.

use std::fmt;

/// A group summing to at least this scores one success.
pub const TEN_THRESHOLD: u32 = 10;

/// In fifteens mode a group summing to at least this scores two successes.
pub const FIFTEEN_THRESHOLD: u32 = 15;

/// No group may sum to more than this.
pub const MAX_GROUP_SUM: u32 = 20;

const TENS_THRESHOLDS: [u32; 1] = [TEN_THRESHOLD];
const FIFTEENS_THRESHOLDS: [u32; 2] = [TEN_THRESHOLD, FIFTEEN_THRESHOLD];

/// How a group's sum converts into successes.
///
/// Fixed for the duration of one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ScoringMode {
    /// A group of 10 or more is worth one success.
    #[default]
    TensOnly,

    /// A group of 15 or more is worth two successes, 10 or more is worth one.
    TensOrFifteens,
}

impl ScoringMode {
    /// Maps the caller's "allow fifteens" flag to a mode.
    pub const fn from_fifteens_flag(allow_fifteens: bool) -> Self {
        if allow_fifteens {
            ScoringMode::TensOrFifteens
        } else {
            ScoringMode::TensOnly
        }
    }

    #[inline]
    pub const fn allows_fifteens(self) -> bool {
        matches!(self, ScoringMode::TensOrFifteens)
    }

    /// The most successes a single group can ever be worth.
    #[inline]
    pub const fn max_successes_per_group(self) -> u32 {
        match self {
            ScoringMode::TensOnly => 1,
            ScoringMode::TensOrFifteens => 2,
        }
    }

    /// Ascending sums at which a group gains one more success.
    pub fn thresholds(self) -> &'static [u32] {
        match self {
            ScoringMode::TensOnly => &TENS_THRESHOLDS,
            ScoringMode::TensOrFifteens => &FIFTEENS_THRESHOLDS,
        }
    }

    /// Successes for a group with the given sum.
    ///
    /// Does not check the group limit; see [`crate::Group::successes`].
    ///
    /// ```
    /// use raises_core::ScoringMode;
    ///
    /// assert_eq!(ScoringMode::TensOnly.successes_for_sum(17), 1);
    /// assert_eq!(ScoringMode::TensOrFifteens.successes_for_sum(17), 2);
    /// assert_eq!(ScoringMode::TensOrFifteens.successes_for_sum(9), 0);
    /// ```
    #[inline]
    pub fn successes_for_sum(self, sum: u32) -> u32 {
        self.thresholds().iter().filter(|&&t| sum >= t).count() as u32
    }

    /// Most successes obtainable from `value` pips spread over fresh groups.
    ///
    /// Tens mode spends 10 per success. Fifteens mode spends 15 per pair of
    /// successes plus one more for a leftover of at least 10, which beats any
    /// other mix of tens and fifteens.
    pub fn max_successes_for_value(self, value: u32) -> u32 {
        match self {
            ScoringMode::TensOnly => value / TEN_THRESHOLD,
            ScoringMode::TensOrFifteens => {
                let pairs = value / FIFTEEN_THRESHOLD;
                let rest = value % FIFTEEN_THRESHOLD;
                pairs * 2 + u32::from(rest >= TEN_THRESHOLD)
            }
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::TensOnly => write!(f, "Tens"),
            ScoringMode::TensOrFifteens => write!(f, "Tens or Fifteens"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tens_only_successes() {
        let mode = ScoringMode::TensOnly;
        assert_eq!(mode.successes_for_sum(0), 0);
        assert_eq!(mode.successes_for_sum(9), 0);
        assert_eq!(mode.successes_for_sum(10), 1);
        assert_eq!(mode.successes_for_sum(20), 1);
        assert_eq!(mode.max_successes_per_group(), 1);
    }

    #[test]
    fn test_fifteens_successes() {
        let mode = ScoringMode::TensOrFifteens;
        assert_eq!(mode.successes_for_sum(9), 0);
        assert_eq!(mode.successes_for_sum(10), 1);
        assert_eq!(mode.successes_for_sum(14), 1);
        assert_eq!(mode.successes_for_sum(15), 2);
        assert_eq!(mode.successes_for_sum(20), 2);
        assert_eq!(mode.max_successes_per_group(), 2);
    }

    #[test]
    fn test_max_successes_for_value() {
        assert_eq!(ScoringMode::TensOnly.max_successes_for_value(29), 2);
        assert_eq!(ScoringMode::TensOrFifteens.max_successes_for_value(9), 0);
        assert_eq!(ScoringMode::TensOrFifteens.max_successes_for_value(14), 1);
        assert_eq!(ScoringMode::TensOrFifteens.max_successes_for_value(25), 3);
        assert_eq!(ScoringMode::TensOrFifteens.max_successes_for_value(30), 4);
        assert_eq!(ScoringMode::TensOrFifteens.max_successes_for_value(39), 4);
        assert_eq!(ScoringMode::TensOrFifteens.max_successes_for_value(40), 5);
    }

    #[test]
    fn test_max_successes_for_value_covers_group_splits() {
        // Any split of a value into groups never beats the fresh-group bound.
        for mode in [ScoringMode::TensOnly, ScoringMode::TensOrFifteens] {
            for a in 0..=20 {
                for b in 0..=20 {
                    let split = mode.successes_for_sum(a) + mode.successes_for_sum(b);
                    assert!(split <= mode.max_successes_for_value(a + b), "{mode} {a}+{b}");
                }
            }
        }
    }

    #[test]
    fn test_from_flag_and_display() {
        assert_eq!(ScoringMode::from_fifteens_flag(false), ScoringMode::TensOnly);
        assert_eq!(
            ScoringMode::from_fifteens_flag(true),
            ScoringMode::TensOrFifteens
        );
        assert_eq!(ScoringMode::TensOrFifteens.to_string(), "Tens or Fifteens");
        assert!(!ScoringMode::default().allows_fifteens());
    }
}
