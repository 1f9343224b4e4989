//! Named rolls and proptest strategies.

use proptest::prelude::*;
use raises_core::{DiceSet, ScoringMode};

/// Largest roll the brute-force oracle is asked to check.
pub const ORACLE_MAX_DICE: usize = 9;

/// Strategy: raw die values, each 1-10.
pub fn dice(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1..=10i64, 0..=max_len)
}

/// Strategy: a valid dice set of up to `max_len` dice.
pub fn dice_set(max_len: usize) -> impl Strategy<Value = DiceSet> {
    dice(max_len).prop_map(|values| match DiceSet::from_values(values) {
        Ok(set) => set,
        Err(err) => panic!("strategy produced an invalid die: {err}"),
    })
}

/// Strategy: a dice set small enough for the brute-force oracle.
pub fn small_dice_set() -> impl Strategy<Value = DiceSet> {
    dice_set(ORACLE_MAX_DICE)
}

/// Strategy: either scoring mode.
pub fn mode() -> impl Strategy<Value = ScoringMode> {
    prop_oneof![Just(ScoringMode::TensOnly), Just(ScoringMode::TensOrFifteens)]
}

/// Builds a dice set from values known to be valid.
pub fn roll(values: &[i64]) -> DiceSet {
    match DiceSet::from_values(values.iter().copied()) {
        Ok(set) => set,
        Err(err) => panic!("fixture roll is invalid: {err}"),
    }
}

/// Two dozen sixes: the best grouping scores below the root bound, so a
/// search over this roll can never stop early on the bound.
pub fn gap_roll() -> DiceSet {
    roll(&[6; 24])
}
