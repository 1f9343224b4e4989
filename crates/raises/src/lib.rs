//! Raises - find the grouping of a 7th Sea roll with the most raises
//!
//! Every die shows 1 to 10. Dice are grouped so each group sums to at most
//! 20; a group worth 10 or more is one raise, and in tens-or-fifteens mode a
//! group worth 15 or more is two. The solver returns the grouping with the
//! most raises it could prove or find within its time budget.
//!
//! # Example
//!
//! ```rust
//! use raises::prelude::*;
//!
//! let result = raises::solve_values([9, 1, 6, 4, 3], ScoringMode::TensOnly).unwrap();
//! assert_eq!(result.score, Successes::of(2));
//! assert!(result.exhaustive);
//! assert_eq!(result.groups[0].values(), vec![9, 1]);
//! ```

// Dice, groups and scoring
pub use raises_core::{
    score, DiceSet, Die, Group, GroupMember, Partition, RaisesError, Result, ScoringMode,
    Successes, FIFTEEN_THRESHOLD, MAX_FACE, MAX_GROUP_SUM, MIN_FACE, TEN_THRESHOLD,
};

// Configuration
pub use raises_config::{
    BounderType, ConfigError, ConstructionType, ReductionConfig, SearchConfig, SolverConfig,
    TerminationConfig, ThreadCount, DEFAULT_TIME_LIMIT,
};

// Solving
pub use raises_solver::{
    reduce, solve, solve_values, Improvement, Reduction, SearchStats, SolveResult, Solver,
    SolverHandle, TerminationReason,
};

// Channel type for streamed improvements
pub use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{DiceSet, Die, Group, Partition, RaisesError, ScoringMode, Successes};
    pub use super::{SolveResult, Solver, SolverConfig, SolverHandle, TerminationReason};
}
