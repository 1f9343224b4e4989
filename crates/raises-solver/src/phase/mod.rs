//! Solver phases.
//!
//! - [`construction`]: builds a starting grouping without search
//! - [`exhaustive`]: branch-and-bound over every canonical grouping
//! - [`partitioned`]: the exhaustive search split across threads

pub mod construction;
pub mod exhaustive;
pub mod partitioned;
