//! Shortest-ladder breadth-first search
//!
//! The word graph is never materialized: from each expansion head the
//! 26 x word-length one-letter substitutions are generated on demand
//! and probed against the sorted index. FIFO expansion order makes the
//! first completion a shortest one.

use super::{Frontier, Ladder, VisitedSet};
use crate::core::{Word, WordIndex};
use std::fmt;

/// Precondition violations rejected before the search runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start and goal are the same word
    SameWord,
    /// Start and goal have different lengths
    LengthMismatch { start: usize, goal: usize },
    /// A word is not present in the dictionary index
    NotInDictionary(String),
    /// The visited set does not cover the index
    VisitedSizeMismatch { index: usize, visited: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameWord => write!(f, "Start and goal words must differ"),
            Self::LengthMismatch { start, goal } => {
                write!(f, "Start ({start} letters) and goal ({goal} letters) must have equal length")
            }
            Self::NotInDictionary(word) => {
                write!(f, "Word '{word}' is not in the dictionary")
            }
            Self::VisitedSizeMismatch { index, visited } => {
                write!(f, "Visited set covers {visited} words but the index holds {index}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Find a shortest ladder from `start` to `goal`
///
/// Breadth-first search over the implicit substitution graph. The
/// returned ladder runs start-to-goal and is one of the shortest; the
/// first completion discovered by FIFO traversal order wins, with no
/// tie-breaking among equally short alternatives. Words are claimed
/// globally on first contact, so a word reached by one branch is
/// unavailable to every other branch for the rest of the search. That
/// keeps the frontier polynomial at the cost of not enumerating every
/// shortest ladder.
///
/// `visited` must be freshly constructed for this call and sized to
/// the index.
///
/// Returns `Ok(None)` when no ladder connects the two words; that is a
/// normal outcome, not an error.
///
/// # Errors
/// Returns `SearchError` when start equals goal, the lengths differ,
/// either word is missing from the index, or the visited set is the
/// wrong size.
pub fn find_shortest_ladder(
    index: &WordIndex,
    visited: &mut VisitedSet,
    start: &Word,
    goal: &Word,
) -> Result<Option<Ladder>, SearchError> {
    if start == goal {
        return Err(SearchError::SameWord);
    }
    if start.len() != goal.len() {
        return Err(SearchError::LengthMismatch {
            start: start.len(),
            goal: goal.len(),
        });
    }
    if visited.len() != index.len() {
        return Err(SearchError::VisitedSizeMismatch {
            index: index.len(),
            visited: visited.len(),
        });
    }

    let start_pos = index
        .find(start)
        .ok_or_else(|| SearchError::NotInDictionary(start.text().to_string()))?;
    let goal_pos = index
        .find(goal)
        .ok_or_else(|| SearchError::NotInDictionary(goal.text().to_string()))?;

    let mut frontier = Frontier::new();
    visited.mark_visited(start_pos);
    frontier.push_back(Ladder::starting_at(start_pos));

    let mut expansions = 0usize;

    while let Some(ladder) = frontier.pop_front() {
        expansions += 1;

        // One reusable buffer per expansion; each position is restored
        // before moving to the next.
        let mut neighbor = index.word(ladder.head()).as_bytes().to_vec();

        for i in 0..neighbor.len() {
            let original = neighbor[i];

            for c in b'a'..=b'z' {
                if c == original {
                    continue;
                }
                neighbor[i] = c;

                let Some(pos) = index.find_bytes(&neighbor) else {
                    continue;
                };
                if visited.is_visited(pos) {
                    continue;
                }

                // Claim before the goal check: once seen, a word belongs
                // to exactly one branch for the rest of the search.
                visited.mark_visited(pos);

                if pos == goal_pos {
                    let mut complete = ladder;
                    complete.push(goal_pos);
                    log::debug!(
                        "ladder found: height {} after {} expansions",
                        complete.len(),
                        expansions
                    );
                    // Remaining in-flight ladders are abandoned here.
                    drop(frontier);
                    return Ok(Some(complete));
                }

                frontier.push_back(ladder.extended(pos));
            }

            neighbor[i] = original;
        }
        // The popped ladder drops here; any continuation lives on as an
        // independent copy already enqueued.
    }

    log::debug!("no ladder exists: frontier exhausted after {expansions} expansions");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(texts: &[&str]) -> WordIndex {
        let mut words: Vec<Word> = texts.iter().map(|t| Word::new(*t).unwrap()).collect();
        words.sort();
        WordIndex::new(words)
    }

    fn search(index: &WordIndex, start: &str, goal: &str) -> Result<Option<Ladder>, SearchError> {
        let start = Word::new(start).unwrap();
        let goal = Word::new(goal).unwrap();
        let mut visited = VisitedSet::new(index.len());
        find_shortest_ladder(index, &mut visited, &start, &goal)
    }

    /// Every returned ladder must satisfy the ladder invariants:
    /// endpoints match, adjacent words differ in exactly one position,
    /// no word repeats.
    fn assert_valid_ladder(index: &WordIndex, ladder: &Ladder, start: &str, goal: &str) {
        let words = ladder.words(index);
        assert_eq!(words.first().map(String::as_str), Some(start));
        assert_eq!(words.last().map(String::as_str), Some(goal));

        for pair in ladder.positions().windows(2) {
            let a = index.word(pair[0]);
            let b = index.word(pair[1]);
            assert!(
                a.differs_by_one(b),
                "'{a}' and '{b}' are not one-letter-adjacent"
            );
        }

        let mut seen = std::collections::HashSet::new();
        for pos in ladder.positions() {
            assert!(seen.insert(pos), "word '{}' repeats", index.word(*pos));
        }
    }

    #[test]
    fn finds_shortest_ladder_cat_to_dog() {
        let index = index_of(&["cat", "cog", "cot", "dog", "dot"]);

        let ladder = search(&index, "cat", "dog").unwrap().unwrap();

        // cat->cot->cog->dog and cat->cot->dot->dog are both minimal
        assert_eq!(ladder.len(), 4);
        assert_valid_ladder(&index, &ladder, "cat", "dog");
    }

    #[test]
    fn adjacent_words_need_one_step() {
        let index = index_of(&["cat", "cot"]);

        let ladder = search(&index, "cat", "cot").unwrap().unwrap();
        assert_eq!(ladder.len(), 2);
        assert_valid_ladder(&index, &ladder, "cat", "cot");
    }

    #[test]
    fn disconnected_words_return_none() {
        let index = index_of(&["cat", "dog"]);

        assert_eq!(search(&index, "cat", "dog").unwrap(), None);
    }

    #[test]
    fn no_path_through_shorter_detour_is_missed() {
        // A direct 3-rung chain exists alongside a longer one; BFS must
        // return the minimal height even though the longer chain's words
        // are enumerated first alphabetically.
        let index = index_of(&["bat", "bad", "bid", "big", "bit", "but"]);

        let ladder = search(&index, "bat", "big").unwrap().unwrap();
        assert_eq!(ladder.len(), 3); // bat -> bit -> big
        assert_valid_ladder(&index, &ladder, "bat", "big");
    }

    #[test]
    fn same_word_rejected() {
        let index = index_of(&["cat", "cot"]);

        assert_eq!(search(&index, "cat", "cat"), Err(SearchError::SameWord));
    }

    #[test]
    fn length_mismatch_rejected() {
        let index = index_of(&["cat", "cots"]);

        assert_eq!(
            search(&index, "cat", "cots"),
            Err(SearchError::LengthMismatch { start: 3, goal: 4 })
        );
    }

    #[test]
    fn missing_start_rejected() {
        let index = index_of(&["cat", "cot", "dog"]);

        assert_eq!(
            search(&index, "cup", "dog"),
            Err(SearchError::NotInDictionary("cup".to_string()))
        );
    }

    #[test]
    fn missing_goal_rejected() {
        let index = index_of(&["cat", "cot", "dog"]);

        assert_eq!(
            search(&index, "cat", "cup"),
            Err(SearchError::NotInDictionary("cup".to_string()))
        );
    }

    #[test]
    fn undersized_visited_set_rejected() {
        let index = index_of(&["cat", "cot", "dog"]);
        let start = Word::new("cat").unwrap();
        let goal = Word::new("dog").unwrap();
        let mut visited = VisitedSet::new(1);

        assert_eq!(
            find_shortest_ladder(&index, &mut visited, &start, &goal),
            Err(SearchError::VisitedSizeMismatch {
                index: 3,
                visited: 1
            })
        );
    }

    #[test]
    fn longer_chain_stays_valid() {
        let index = index_of(&[
            "cold", "cord", "card", "ward", "warm", "wood", "word", "worm",
        ]);

        let ladder = search(&index, "cold", "warm").unwrap().unwrap();
        assert_eq!(ladder.len(), 5); // cold -> cord -> word -> worm -> warm (or card/ward route)
        assert_valid_ladder(&index, &ladder, "cold", "warm");
    }

    #[test]
    fn first_claim_marks_words_globally() {
        let index = index_of(&["cat", "cog", "cot", "dog", "dot"]);
        let start = Word::new("cat").unwrap();
        let goal = Word::new("dog").unwrap();
        let mut visited = VisitedSet::new(index.len());

        find_shortest_ladder(&index, &mut visited, &start, &goal)
            .unwrap()
            .unwrap();

        // Everything reachable before the goal was claimed, including
        // words not on the returned ladder.
        for pos in 0..index.len() {
            assert!(visited.is_visited(pos));
        }
    }

    #[test]
    fn unreachable_search_terminates_with_partial_marks() {
        // "bat" expands into a connected pocket that never reaches "fog"
        let index = index_of(&["bat", "bit", "but", "fog"]);
        let start = Word::new("bat").unwrap();
        let goal = Word::new("fog").unwrap();
        let mut visited = VisitedSet::new(index.len());

        let result = find_shortest_ladder(&index, &mut visited, &start, &goal).unwrap();
        assert_eq!(result, None);
        assert!(!visited.is_visited(index.find_bytes(b"fog").unwrap()));
    }
}
