//! Dictionary word representation
//!
//! A Word is an immutable lowercase-ASCII word of arbitrary fixed length.
//! The ladder length is chosen per run, so words carry their own length
//! instead of baking it into the type.

use std::fmt;

/// An immutable, validated dictionary word
///
/// Stored as lowercase ASCII. Ordering is lexicographic byte-wise, which
/// is what the sorted dictionary's binary search relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty, non-ASCII, or contains
    /// anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True for the empty word (never constructible through `new`)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word as raw bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check whether two words are one-letter-substitution adjacent
    ///
    /// True iff both words have the same length and differ in exactly
    /// one position.
    #[must_use]
    pub fn differs_by_one(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut diffs = 0;
        for (a, b) in self.as_bytes().iter().zip(other.as_bytes()) {
            if a != b {
                diffs += 1;
                if diffs > 1 {
                    return false;
                }
            }
        }
        diffs == 1
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
        assert_eq!(word.as_bytes(), b"crane");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("ladder").unwrap().len(), 6);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "cat");

        let word2 = Word::new("CaT").unwrap();
        assert_eq!(word2.text(), "cat");
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("c4t").is_err()); // Number
        assert!(Word::new("ca t").is_err()); // Space
        assert!(Word::new("cat!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("dog").unwrap();
        assert_eq!(word.char_at(0), b'd');
        assert_eq!(word.char_at(1), b'o');
        assert_eq!(word.char_at(2), b'g');
    }

    #[test]
    fn differs_by_one_adjacent() {
        let cat = Word::new("cat").unwrap();
        let cot = Word::new("cot").unwrap();
        assert!(cat.differs_by_one(&cot));
        assert!(cot.differs_by_one(&cat));
    }

    #[test]
    fn differs_by_one_identical_words() {
        let cat = Word::new("cat").unwrap();
        let same = Word::new("cat").unwrap();
        assert!(!cat.differs_by_one(&same));
    }

    #[test]
    fn differs_by_one_two_substitutions() {
        let cat = Word::new("cat").unwrap();
        let cog = Word::new("cog").unwrap();
        assert!(!cat.differs_by_one(&cog));
    }

    #[test]
    fn differs_by_one_length_mismatch() {
        let cat = Word::new("cat").unwrap();
        let cats = Word::new("cats").unwrap();
        assert!(!cat.differs_by_one(&cats));
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("dog").unwrap(),
            Word::new("cat").unwrap(),
            Word::new("cot").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "cot", "dog"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("cat").unwrap();
        assert_eq!(format!("{word}"), "cat");
    }
}
