//! Handle for stopping a running solve.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable view of a [`crate::Solver`]'s run state, usable from any thread.
///
/// A request made while no solve is running applies to the next solve,
/// which then stops at its first node. The request is cleared whenever a
/// solve finishes.
#[derive(Clone)]
pub struct SolverHandle {
    solving: Arc<AtomicBool>,
    terminate_early: Arc<AtomicBool>,
}

impl SolverHandle {
    pub(crate) fn new(solving: Arc<AtomicBool>, terminate_early: Arc<AtomicBool>) -> Self {
        Self {
            solving,
            terminate_early,
        }
    }

    /// Whether a solve is running right now.
    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    /// Asks the running solve to stop and return its best grouping.
    pub fn terminate_early(&self) {
        self.terminate_early.store(true, Ordering::SeqCst);
    }

    /// Whether a stop request is pending.
    pub fn is_terminate_early_requested(&self) -> bool {
        self.terminate_early.load(Ordering::SeqCst)
    }
}

impl Debug for SolverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverHandle")
            .field("solving", &self.solving.load(Ordering::SeqCst))
            .field("terminate_early", &self.terminate_early.load(Ordering::SeqCst))
            .finish()
    }
}
