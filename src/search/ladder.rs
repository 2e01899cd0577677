//! Partial word ladder representation
//!
//! A ladder is an owned sequence of dictionary positions: the start word
//! at the front, the most recently added word (the exploration frontier
//! point) at the back. Extending a ladder always produces an independent
//! copy, so sibling branches never alias each other's state. Teardown is
//! structural: dropping a ladder releases everything it owns.

use crate::core::WordIndex;

/// An owned path of word positions from the start word to the current head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    positions: Vec<usize>,
}

impl Ladder {
    /// A one-word ladder
    #[must_use]
    pub fn starting_at(position: usize) -> Self {
        Self {
            positions: vec![position],
        }
    }

    /// An independent copy of this ladder with `position` as the new head
    ///
    /// O(length). Each candidate neighbor extends its own private copy;
    /// the parent ladder is untouched.
    #[must_use]
    pub fn extended(&self, position: usize) -> Self {
        let mut positions = Vec::with_capacity(self.positions.len() + 1);
        positions.extend_from_slice(&self.positions);
        positions.push(position);
        Self { positions }
    }

    /// Append a word to this ladder in place
    ///
    /// Used when completing a ladder the caller already owns outright.
    pub fn push(&mut self, position: usize) {
        self.positions.push(position);
    }

    /// The most recently added word's position
    ///
    /// # Panics
    /// A ladder is never empty; constructed via `starting_at`, it always
    /// holds at least one word.
    #[inline]
    #[must_use]
    pub fn head(&self) -> usize {
        *self
            .positions
            .last()
            .expect("ladder always holds at least one word")
    }

    /// Number of words in the ladder (a single word counts as 1)
    ///
    /// This is the height reported to the user.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A ladder is never empty by construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Word positions in start-to-head order
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Resolve the ladder to word text in start-to-head order
    #[must_use]
    pub fn words(&self, index: &WordIndex) -> Vec<String> {
        self.positions
            .iter()
            .map(|&pos| index.word(pos).text().to_string())
            .collect()
    }
}
