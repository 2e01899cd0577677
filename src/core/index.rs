//! Sorted dictionary index
//!
//! The search probes 26 x word-length candidate substitutions per
//! expansion, so membership lookups must be cheap. The index is a
//! sorted, duplicate-free word array with binary search, O(log n)
//! per probe.

use super::Word;

/// An immutable, sorted, duplicate-free collection of equal-length words
///
/// Built once by the loader and read-only for the lifetime of a search.
#[derive(Debug, Clone)]
pub struct WordIndex {
    words: Vec<Word>,
}

impl WordIndex {
    /// Build an index from an already sorted, duplicate-free word list
    ///
    /// The loader establishes sortedness before handing the list over;
    /// the index stores it verbatim.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        debug_assert!(
            words.windows(2).all(|pair| pair[0] < pair[1]),
            "word list must be sorted and duplicate-free"
        );
        Self { words }
    }

    /// Find the position of an exact match via binary search
    ///
    /// Comparison is lexicographic byte-wise. Returns `None` when the
    /// word is not in the dictionary.
    #[must_use]
    pub fn find(&self, target: &Word) -> Option<usize> {
        self.find_bytes(target.as_bytes())
    }

    /// Binary search by raw bytes
    ///
    /// The search mutates a single neighbor buffer in place instead of
    /// building a `Word` per candidate; this entry point lets it probe
    /// the index without allocating.
    #[must_use]
    pub fn find_bytes(&self, target: &[u8]) -> Option<usize> {
        self.words
            .binary_search_by(|word| word.as_bytes().cmp(target))
            .ok()
    }

    /// Get the word at a position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn word(&self, position: usize) -> &Word {
        &self.words[position]
    }

    /// Number of words in the index
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the index holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
