//! Upper bounds for branch-and-bound pruning.
//!
//! A bounder estimates the most successes any completion of a partial
//! grouping could reach. Estimates must never undershoot, or the search
//! would prune away an optimum.

use std::fmt::Debug;

use raises_config::BounderType;
use smallvec::SmallVec;

use crate::working::WorkingPartition;

/// Calculates optimistic bounds for a partial grouping.
pub trait ScoreBounder: Send + Sync + Debug {
    /// Upper bound on the total successes of any completion of `working`
    /// once dice worth `remaining_value` pips are placed.
    fn optimistic_bound(&self, working: &WorkingPartition, remaining_value: u32) -> u32;
}

/// Treats every uncapped group and the remaining dice as one pool of pips.
///
/// Groups already at the success cap keep what they have; everything else
/// is assumed to regroup freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoarseBounder;

impl ScoreBounder for CoarseBounder {
    fn optimistic_bound(&self, working: &WorkingPartition, remaining_value: u32) -> u32 {
        let mode = working.mode();
        let cap = mode.max_successes_per_group();
        let mut locked = 0;
        let mut pool = remaining_value;
        for &sum in working.sums() {
            let successes = mode.successes_for_sum(sum);
            if successes == cap {
                locked += successes;
            } else {
                pool += sum;
            }
        }
        locked + mode.max_successes_for_value(pool)
    }
}

/// Prices each further success an open group could earn.
///
/// Every threshold above a group's sum costs the pips needed to close the gap
/// from the previous threshold (or from the current sum, for the first).
/// Topping up the `k` cheapest gaps leaves the rest of the remaining pips for
/// fresh groups; the bound is the best `k`. Never looser than
/// [`CoarseBounder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TightBounder;

impl ScoreBounder for TightBounder {
    fn optimistic_bound(&self, working: &WorkingPartition, remaining_value: u32) -> u32 {
        let mode = working.mode();
        let mut costs: SmallVec<[u32; 32]> = SmallVec::new();
        for &sum in working.sums() {
            let mut floor = sum;
            for &threshold in mode.thresholds().iter().filter(|&&t| t > sum) {
                costs.push(threshold - floor);
                floor = threshold;
            }
        }
        costs.sort_unstable();

        let mut best_extra = mode.max_successes_for_value(remaining_value);
        let mut spent = 0;
        for (k, cost) in costs.iter().enumerate() {
            spent += cost;
            if spent > remaining_value {
                break;
            }
            let extra = (k as u32 + 1) + mode.max_successes_for_value(remaining_value - spent);
            best_extra = best_extra.max(extra);
        }

        let tight = working.successes() + best_extra;
        tight.min(CoarseBounder.optimistic_bound(working, remaining_value))
    }
}

/// The bounder selected by configuration.
#[derive(Debug, Clone, Copy)]
pub enum ConfiguredBounder {
    Coarse(CoarseBounder),
    Tight(TightBounder),
}

impl From<BounderType> for ConfiguredBounder {
    fn from(bounder_type: BounderType) -> Self {
        match bounder_type {
            BounderType::Coarse => ConfiguredBounder::Coarse(CoarseBounder),
            BounderType::Tight => ConfiguredBounder::Tight(TightBounder),
        }
    }
}

impl ScoreBounder for ConfiguredBounder {
    #[inline]
    fn optimistic_bound(&self, working: &WorkingPartition, remaining_value: u32) -> u32 {
        match self {
            ConfiguredBounder::Coarse(b) => b.optimistic_bound(working, remaining_value),
            ConfiguredBounder::Tight(b) => b.optimistic_bound(working, remaining_value),
        }
    }
}
