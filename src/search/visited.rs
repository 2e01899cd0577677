//! Per-search word usage marks
//!
//! One flag per dictionary position. Once a word is claimed by any
//! partial ladder it stays claimed for the rest of the search; the
//! first branch to reach a word owns it outright. This global
//! first-claim rule is what bounds total work: no two in-flight
//! ladders ever compete for the same word.

/// Search-scoped marker of words already placed into some ladder
///
/// Built fresh for each search invocation; there is no unmark and no
/// reset.
#[derive(Debug)]
pub struct VisitedSet {
    used: Vec<bool>,
}

impl VisitedSet {
    /// All positions unmarked
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            used: vec![false; size],
        }
    }

    /// Has this position ever been placed into a ladder?
    ///
    /// # Panics
    /// Panics if position >= the size given at construction
    #[inline]
    #[must_use]
    pub fn is_visited(&self, position: usize) -> bool {
        self.used[position]
    }

    /// Permanently claim a position for the current search
    ///
    /// # Panics
    /// Panics if position >= the size given at construction
    #[inline]
    pub fn mark_visited(&mut self, position: usize) {
        self.used[position] = true;
    }

    /// Number of tracked positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// True when tracking zero positions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
