//! Solve-wide progress shared between search shards.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use raises_core::Successes;
use tokio::sync::mpsc::UnboundedSender;

use crate::event::Improvement;

const NO_SCORE: i64 = -1;

/// Progress every shard of one solve reads and writes.
///
/// The best score is kept as an atomic so shards prune against each other's
/// incumbents without locking. It holds search-only successes; the reserved
/// offset is added when reporting.
#[derive(Debug)]
pub struct SharedProgress {
    start: Instant,
    best_score: AtomicI64,
    nodes: AtomicU64,
    improvements: AtomicU64,
    root_bound: u32,
    reserved: Successes,
    sender: Option<UnboundedSender<Improvement>>,
}

impl SharedProgress {
    pub fn new(root_bound: u32, reserved: Successes) -> Self {
        Self::started_at(Instant::now(), root_bound, reserved)
    }

    /// Progress for a solve whose clock started at `start`.
    pub fn started_at(start: Instant, root_bound: u32, reserved: Successes) -> Self {
        Self {
            start,
            best_score: AtomicI64::new(NO_SCORE),
            nodes: AtomicU64::new(0),
            improvements: AtomicU64::new(0),
            root_bound,
            reserved,
            sender: None,
        }
    }

    /// Streams every strict improvement to `sender`.
    pub fn with_sender(mut self, sender: UnboundedSender<Improvement>) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Best search score found by any shard, if any.
    pub fn best_score(&self) -> Option<u32> {
        let best = self.best_score.load(Ordering::Acquire);
        (best != NO_SCORE).then_some(best as u32)
    }

    /// Whether a node with upper bound `bound` can still beat the best.
    #[inline]
    pub fn can_improve(&self, bound: u32) -> bool {
        i64::from(bound) > self.best_score.load(Ordering::Acquire)
    }

    /// Records `score` if it beats every score seen so far.
    ///
    /// Returns true when this call raised the shared best.
    pub fn offer(&self, score: u32) -> bool {
        let previous = self.best_score.fetch_max(i64::from(score), Ordering::AcqRel);
        if i64::from(score) > previous {
            self.improvements.fetch_add(1, Ordering::Relaxed);
            true
        } else {
            false
        }
    }

    /// Upper bound of the whole search tree.
    pub fn root_bound(&self) -> u32 {
        self.root_bound
    }

    /// Whether the best score already meets the root bound.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        !self.can_improve(self.root_bound)
    }

    pub fn reserved(&self) -> Successes {
        self.reserved
    }

    pub fn sender(&self) -> Option<&UnboundedSender<Improvement>> {
        self.sender.as_ref()
    }

    pub(crate) fn add_nodes(&self, count: u64) {
        self.nodes.fetch_add(count, Ordering::Relaxed);
    }

    /// Nodes flushed by all shards so far.
    pub fn nodes(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    pub fn improvements(&self) -> u64 {
        self.improvements.load(Ordering::Relaxed)
    }
}
