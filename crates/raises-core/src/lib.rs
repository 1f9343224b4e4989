//! Raises Core - dice, grouping and scoring types
//!
//! This crate provides the fundamental abstractions for the raises solver:
//! - [`Die`] and [`DiceSet`] for validated rolls
//! - [`ScoringMode`] for the tens / tens-or-fifteens rules
//! - [`Group`] and [`Partition`] for candidate groupings
//! - [`Successes`] and [`score`] for evaluating a partition
//! - [`RaisesError`] for everything that can go wrong

pub mod die;
pub mod error;
pub mod group;
pub mod mode;
pub mod score;


pub use die::{DiceSet, Die, MAX_FACE, MIN_FACE};
pub use error::{RaisesError, Result};
pub use group::{Group, GroupMember, Partition};
pub use mode::{ScoringMode, FIFTEEN_THRESHOLD, MAX_GROUP_SUM, TEN_THRESHOLD};
pub use score::{score, Successes};
