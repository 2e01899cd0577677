//! Dictionary ingestion
//!
//! Reads whitespace-separated tokens, keeps only words of the
//! configured length, and produces the sorted, duplicate-free list the
//! index is built from. The two-pass shape (count, then build against
//! that count) lets an unreadable source and a count mismatch fail as
//! distinct conditions.

use crate::core::{Word, WordIndex};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Errors from dictionary loading
#[derive(Debug)]
pub enum LoadError {
    /// The dictionary source could not be read
    Io(io::Error),
    /// The second pass read a different number of qualifying words than
    /// the first
    CountMismatch { expected: usize, actual: usize },
    /// Fewer than two qualifying words; no search is possible
    InsufficientWords { word_size: usize, found: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Could not read dictionary: {e}"),
            Self::CountMismatch { expected, actual } => {
                write!(f, "Dictionary changed while loading: counted {expected} words, read {actual}")
            }
            Self::InsufficientWords { word_size, found } => {
                write!(f, "Dictionary contains insufficient {word_size}-letter words (found {found}, need at least 2)")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Count qualifying words of exactly `word_size` letters
///
/// # Errors
/// Returns `LoadError::Io` if the source is unreadable.
pub fn count_words_of_length<P: AsRef<Path>>(path: P, word_size: usize) -> Result<usize, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .split_whitespace()
        .filter(|token| qualifies(token, word_size))
        .count())
}

/// Read qualifying words, checking the count against the first pass
///
/// # Errors
/// Returns `LoadError::Io` if the source is unreadable, or
/// `LoadError::CountMismatch` if the number of qualifying words no
/// longer matches `expected`.
pub fn build_word_list<P: AsRef<Path>>(
    path: P,
    expected: usize,
    word_size: usize,
) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    let words = qualifying_words(&content, word_size);

    if words.len() != expected {
        return Err(LoadError::CountMismatch {
            expected,
            actual: words.len(),
        });
    }
    Ok(words)
}

/// Load a dictionary file into a ready-to-search index
///
/// Counts, reads, sorts, and deduplicates the qualifying words, then
/// builds the index. The sorted, duplicate-free invariant the index
/// relies on is established here.
///
/// # Errors
/// Returns `LoadError::Io` for an unreadable source,
/// `LoadError::CountMismatch` if the source changed between passes, and
/// `LoadError::InsufficientWords` when fewer than two qualifying words
/// remain after deduplication.
pub fn load_dictionary<P: AsRef<Path>>(path: P, word_size: usize) -> Result<WordIndex, LoadError> {
    let path = path.as_ref();
    let expected = count_words_of_length(path, word_size)?;
    let mut words = build_word_list(path, expected, word_size)?;

    words.sort_unstable();
    words.dedup();

    log::info!(
        "loaded {} distinct {word_size}-letter words from {}",
        words.len(),
        path.display()
    );

    require_at_least_two(words, word_size).map(WordIndex::new)
}

/// Build an index from an in-memory word list (embedded dictionary, tests)
///
/// # Errors
/// Returns `LoadError::InsufficientWords` when fewer than two
/// qualifying words remain after deduplication.
pub fn load_dictionary_from_slice(slice: &[&str], word_size: usize) -> Result<WordIndex, LoadError> {
    let mut words: Vec<Word> = slice
        .iter()
        .filter(|token| qualifies(token, word_size))
        .filter_map(|token| Word::new(*token).ok())
        .collect();
    words.sort_unstable();
    words.dedup();

    log::info!(
        "loaded {} distinct {word_size}-letter words from the embedded dictionary",
        words.len()
    );

    require_at_least_two(words, word_size).map(WordIndex::new)
}

fn qualifying_words(content: &str, word_size: usize) -> Vec<Word> {
    content
        .split_whitespace()
        .filter(|token| qualifies(token, word_size))
        .filter_map(|token| Word::new(token).ok())
        .collect()
}

fn qualifies(token: &str, word_size: usize) -> bool {
    token.len() == word_size && token.chars().all(|c| c.is_ascii_alphabetic())
}

fn require_at_least_two(words: Vec<Word>, word_size: usize) -> Result<Vec<Word>, LoadError> {
    if words.len() < 2 {
        return Err(LoadError::InsufficientWords {
            word_size,
            found: words.len(),
        });
    }
    Ok(words)
}
