//! Turning roll text into dice.
//!
//! Roll text is accepted the way players paste it from chat: anything but
//! digits, `+` and `,` is dropped, runs of `+` separate dice like commas, and
//! trailing separators are ignored. So `"9+1, 6+4"` and `"9,1,6,4"` are the
//! same roll.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use raises::{DiceSet, Die, MAX_FACE, MIN_FACE};

use crate::error::{CliError, Result};

/// Strips roll text down to comma-separated digit runs.
pub fn clean_roll_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut in_plus_run = false;
    for c in text.chars() {
        match c {
            '0'..='9' | ',' => {
                cleaned.push(c);
                in_plus_run = false;
            }
            '+' => {
                if !in_plus_run {
                    cleaned.push(',');
                }
                in_plus_run = true;
            }
            _ => {}
        }
    }
    let kept = cleaned.trim_end_matches(',').len();
    cleaned.truncate(kept);
    cleaned
}

/// Parses roll text into validated dice.
///
/// Every token between separators must be a die value; an empty token
/// (as in `"5,,3"`) is rejected rather than skipped.
///
/// # Errors
///
/// [`CliError::NoDice`] when nothing is left after cleaning, and
/// [`CliError::InvalidToken`] for the first token that is not 1 to 10.
pub fn parse_dice(text: &str) -> Result<DiceSet> {
    let cleaned = clean_roll_text(text);
    if cleaned.is_empty() {
        return Err(CliError::NoDice);
    }

    let dice = cleaned
        .split(',')
        .map(|token| {
            token
                .parse::<i64>()
                .ok()
                .and_then(|value| Die::new(value).ok())
                .ok_or_else(|| CliError::InvalidToken(token.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(DiceSet::new(dice))
}

/// Rolls `count` ten-sided dice from `seed`.
///
/// The same seed always gives the same roll.
pub fn roll_dice(count: usize, seed: u64) -> DiceSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dice = (0..count)
        .filter_map(|_| Die::new(rng.random_range(MIN_FACE as i64..=MAX_FACE as i64)).ok())
        .collect();
    DiceSet::new(dice)
}

/// A fresh seed for `--roll` when none is given.
pub fn random_seed() -> u64 {
    rand::rng().random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clean_roll_text() {
        assert_eq!(clean_roll_text("9+1, 6+4"), "9,1,6,4");
        assert_eq!(clean_roll_text("10 ++ 3,"), "10,3");
        assert_eq!(clean_roll_text("rolled: 7, 3, 2!"), "7,3,2");
        assert_eq!(clean_roll_text("+++"), "");
        assert_eq!(clean_roll_text("5,,3"), "5,,3");
    }

    #[test]
    fn test_parse_dice() {
        let dice = parse_dice("9+1, 6+4").unwrap();
        assert_eq!(dice.values(), vec![9, 1, 6, 4]);

        let dice = parse_dice("[10, 10]").unwrap();
        assert_eq!(dice.values(), vec![10, 10]);
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert!(matches!(parse_dice("4,11"), Err(CliError::InvalidToken(t)) if t == "11"));
        assert!(matches!(parse_dice("0"), Err(CliError::InvalidToken(t)) if t == "0"));
        assert!(matches!(parse_dice("5,,3"), Err(CliError::InvalidToken(t)) if t.is_empty()));
        // Spaces are dropped, so adjacent digits merge into one token.
        assert!(matches!(parse_dice("5 3"), Err(CliError::InvalidToken(t)) if t == "53"));
        assert!(matches!(parse_dice("none"), Err(CliError::NoDice)));
        assert!(matches!(parse_dice(""), Err(CliError::NoDice)));
    }

    #[test]
    fn test_roll_is_seeded() {
        let a = roll_dice(12, 42);
        let b = roll_dice(12, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert!(a.values().iter().all(|&v| (1..=10).contains(&v)));
        assert!(roll_dice(0, 7).is_empty());
    }

    proptest! {
        #[test]
        fn parse_accepts_any_separator_mix(
            values in prop::collection::vec(1..=10i64, 1..20),
            plus in prop::collection::vec(any::<bool>(), 20),
        ) {
            let mut text = String::new();
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    text.push_str(if plus[i] { " + " } else { ", " });
                }
                text.push_str(&value.to_string());
            }
            let dice = parse_dice(&text).unwrap();
            let parsed: Vec<i64> = dice.values().into_iter().map(i64::from).collect();
            prop_assert_eq!(parsed, values);
        }
    }
}
