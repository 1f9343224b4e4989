//! Incrementally scored partial grouping.
//!
//! The search moves through the tree by assigning one die at a time and
//! undoing it on the way back up. [`WorkingPartition`] keeps the open group
//! sums and the running success count so neither move needs a rescan.

use raises_core::{ScoringMode, MAX_GROUP_SUM};
use smallvec::SmallVec;

/// Group sums of a partial assignment, updated by assign and undo.
#[derive(Debug, Clone)]
pub struct WorkingPartition {
    mode: ScoringMode,
    sums: SmallVec<[u32; 16]>,
    assignment: Vec<usize>,
    successes: u32,
}

impl WorkingPartition {
    pub fn new(mode: ScoringMode, die_count: usize) -> Self {
        Self {
            mode,
            sums: SmallVec::new(),
            assignment: Vec::with_capacity(die_count),
            successes: 0,
        }
    }

    #[inline]
    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// Number of dice assigned so far.
    #[inline]
    pub fn depth(&self) -> usize {
        self.assignment.len()
    }

    /// Current sum of every open group, by group index.
    #[inline]
    pub fn sums(&self) -> &[u32] {
        &self.sums
    }

    #[inline]
    pub fn group_count(&self) -> usize {
        self.sums.len()
    }

    /// Successes scored by the open groups as they stand.
    #[inline]
    pub fn successes(&self) -> u32 {
        self.successes
    }

    /// Group index of each assigned die, in assignment order.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Whether a die of `value` fits in `group` without breaking the limit.
    /// `group == group_count()` means a fresh group and always fits.
    #[inline]
    pub fn fits(&self, group: usize, value: u32) -> bool {
        match self.sums.get(group) {
            Some(&sum) => sum + value <= MAX_GROUP_SUM,
            None => group == self.sums.len(),
        }
    }

    /// Whether `group` already scores the most a group can.
    #[inline]
    pub fn is_capped(&self, group: usize) -> bool {
        self.mode.successes_for_sum(self.sums[group]) == self.mode.max_successes_per_group()
    }

    /// Assigns the next die to `group`, opening it if it is the next index.
    pub fn assign(&mut self, group: usize, value: u32) {
        debug_assert!(self.fits(group, value));
        if group == self.sums.len() {
            self.sums.push(0);
        }
        let before = self.mode.successes_for_sum(self.sums[group]);
        self.sums[group] += value;
        let after = self.mode.successes_for_sum(self.sums[group]);
        self.successes += after - before;
        self.assignment.push(group);
    }

    /// Reverts the most recent [`assign`](Self::assign) of a die of `value`.
    pub fn undo(&mut self, value: u32) {
        let Some(group) = self.assignment.pop() else {
            return;
        };
        let before = self.mode.successes_for_sum(self.sums[group]);
        self.sums[group] -= value;
        let after = self.mode.successes_for_sum(self.sums[group]);
        self.successes -= before - after;
        if self.sums[group] == 0 && group + 1 == self.sums.len() {
            self.sums.pop();
        }
    }
}
