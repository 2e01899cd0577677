//! Word Ladder
//!
//! Finds the shortest "word ladder" between two equal-length dictionary
//! words: a chain of words, each differing from the previous by exactly
//! one letter in the same position, with no word reused. Breadth-first
//! search over the implicit substitution graph guarantees the result is
//! a shortest chain.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Word;
//! use word_ladder::search::{VisitedSet, find_shortest_ladder};
//! use word_ladder::wordlists::loader::load_dictionary_from_slice;
//!
//! let index = load_dictionary_from_slice(&["cat", "cot", "cog", "dog", "dot"], 3).unwrap();
//! let start = Word::new("cat").unwrap();
//! let goal = Word::new("dog").unwrap();
//!
//! let mut visited = VisitedSet::new(index.len());
//! let ladder = find_shortest_ladder(&index, &mut visited, &start, &goal)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(ladder.len(), 4);
//! ```

// Core domain types
pub mod core;

// Breadth-first ladder search
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
