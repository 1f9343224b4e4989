//! Raises Solver Engine
//!
//! This crate provides the grouping search:
//! - Reduction of guaranteed groups before searching
//! - Construction heuristic for a starting incumbent
//! - Depth-first branch-and-bound with admissible bounds
//! - Termination conditions (time, node count, external cancellation)
//! - Optional parallel search over independent subtrees
//! - Streaming of improvements while solving

pub mod assembler;
pub mod event;
pub mod phase;
pub mod problem;
pub mod realtime;
pub mod reduction;
pub mod result;
pub mod scope;
pub mod solver;
pub mod stats;
pub mod termination;
pub mod working;

pub use event::Improvement;
pub use phase::exhaustive::{
    CoarseBounder, ConfiguredBounder, ExhaustiveSearch, ScoreBounder, SearchOutcome,
    TightBounder,
};
pub use phase::partitioned::PartitionedSearch;
pub use problem::{Candidate, SearchProblem};
pub use realtime::SolverHandle;
pub use reduction::{reduce, Reduction};
pub use result::SolveResult;
pub use solver::{solve, solve_values, Solver};
pub use stats::SearchStats;
pub use termination::{Termination, TerminationReason};
pub use working::WorkingPartition;
