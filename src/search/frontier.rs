//! FIFO queue of in-progress ladders
//!
//! Strict first-in-first-out discipline is what makes the traversal
//! breadth-first: ladders of length k are fully expanded before any
//! ladder of length k + 1. The frontier owns every enqueued ladder;
//! popping transfers ownership to the caller.

use super::Ladder;
use std::collections::VecDeque;

/// FIFO queue of partial ladders awaiting expansion
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Ladder>,
}

impl Frontier {
    /// An empty frontier
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue a ladder at the back, transferring ownership in
    pub fn push_back(&mut self, ladder: Ladder) {
        self.queue.push_back(ladder);
    }

    /// Dequeue the oldest ladder, transferring ownership out
    ///
    /// Returns `None` on an empty frontier; callers drive the search
    /// loop with `while let`.
    pub fn pop_front(&mut self) -> Option<Ladder> {
        self.queue.pop_front()
    }

    /// True if no ladders are enqueued
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of enqueued ladders
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

// Dropping the frontier releases every ladder it still owns; on a
// successful completion all remaining in-flight ladders are abandoned
// this way.
