//! Control over a solve running on another thread.
//!
//! A [`SolverHandle`] is cheap to clone and can be moved anywhere. Requesting
//! termination makes the running search stop at its next node and return the
//! best grouping found so far, flagged as timed out.
//!
//! # Example
//!
//! ```
//! use std::thread;
//! use std::time::Duration;
//! use raises_core::{DiceSet, ScoringMode};
//! use raises_solver::{Solver, TerminationReason};
//!
//! let mut solver = Solver::default();
//! let handle = solver.handle();
//! let dice = DiceSet::from_values([7; 40].into_iter().chain([6; 40])).unwrap();
//!
//! let result = thread::scope(|s| {
//!     s.spawn(|| {
//!         while !handle.is_solving() {
//!             thread::sleep(Duration::from_millis(1));
//!         }
//!         handle.terminate_early();
//!     });
//!     solver.solve(&dice, ScoringMode::TensOnly)
//! })
//! .unwrap();
//!
//! assert_eq!(result.termination, TerminationReason::Cancelled);
//! assert!(result.timed_out);
//! assert!(result.partition().covers(&dice));
//! ```

mod solver_handle;

pub use solver_handle::SolverHandle;
