//! Error types for the raises solver

use thiserror::Error;

/// Main error type for raises operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaisesError {
    /// A die value outside 1..=10 was supplied.
    #[error("Invalid die value: {value}. Must be between 1 and 10.")]
    InvalidDieValue { value: i64 },

    /// A group sums to more than the per-group limit.
    #[error("Group {group} sums to {sum}, above the limit of 20")]
    GroupLimitExceeded { group: usize, sum: u32 },

    /// A group assignment vector is malformed.
    #[error("Invalid group assignment: {0}")]
    InvalidAssignment(String),

    /// The search backend could not produce any candidate partition.
    #[error("Solver produced no candidate: {0}")]
    SolverFailure(String),
}

/// Result type alias for raises operations
pub type Result<T> = std::result::Result<T, RaisesError>;
