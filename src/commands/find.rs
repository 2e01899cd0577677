//! One-shot ladder command
//!
//! Runs a single start-to-goal search and packages the outcome for
//! rendering.

use crate::core::{Word, WordIndex};
use crate::search::{VisitedSet, find_shortest_ladder};

/// Configuration for a single ladder search
pub struct FindConfig {
    pub start: String,
    pub goal: String,
}

impl FindConfig {
    #[must_use]
    pub const fn new(start: String, goal: String) -> Self {
        Self { start, goal }
    }
}

/// Outcome of a single ladder search
pub struct FindResult {
    pub start: String,
    pub goal: String,
    /// Words start-to-goal, or `None` when no ladder connects them
    pub ladder: Option<Vec<String>>,
    /// Word count of the ladder; 0 when no ladder exists
    pub height: usize,
}

/// Find the shortest ladder between two words
///
/// # Errors
///
/// Returns an error when either word is malformed, absent from the
/// dictionary, the wrong length, or equal to the other.
pub fn find_ladder(config: FindConfig, index: &WordIndex) -> Result<FindResult, String> {
    let start = Word::new(&config.start).map_err(|e| format!("Invalid start word: {e}"))?;
    let goal = Word::new(&config.goal).map_err(|e| format!("Invalid goal word: {e}"))?;

    // The visited set is scoped to this one search
    let mut visited = VisitedSet::new(index.len());
    let ladder =
        find_shortest_ladder(index, &mut visited, &start, &goal).map_err(|e| e.to_string())?;

    let (words, height) = match ladder {
        Some(ladder) => {
            let height = ladder.len();
            (Some(ladder.words(index)), height)
        }
        None => (None, 0),
    };

    // Echo the normalized words so the rendered endpoints match the
    // lowercase ladder rungs
    Ok(FindResult {
        start: start.text().to_string(),
        goal: goal.text().to_string(),
        ladder: words,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::load_dictionary_from_slice;

    fn classic_index() -> WordIndex {
        load_dictionary_from_slice(&["cat", "cot", "cog", "dog", "dot"], 3).unwrap()
    }

    #[test]
    fn find_returns_full_ladder() {
        let index = classic_index();
        let config = FindConfig::new("cat".to_string(), "dog".to_string());

        let result = find_ladder(config, &index).unwrap();

        let ladder = result.ladder.unwrap();
        assert_eq!(result.height, 4);
        assert_eq!(ladder.len(), 4);
        assert_eq!(ladder.first().map(String::as_str), Some("cat"));
        assert_eq!(ladder.last().map(String::as_str), Some("dog"));
    }

    #[test]
    fn find_reports_no_ladder_with_zero_height() {
        let index = load_dictionary_from_slice(&["cat", "dog"], 3).unwrap();
        let config = FindConfig::new("cat".to_string(), "dog".to_string());

        let result = find_ladder(config, &index).unwrap();

        assert!(result.ladder.is_none());
        assert_eq!(result.height, 0);
    }

    #[test]
    fn find_rejects_same_word() {
        let index = classic_index();
        let config = FindConfig::new("cat".to_string(), "cat".to_string());

        assert!(find_ladder(config, &index).is_err());
    }

    #[test]
    fn find_rejects_unknown_word() {
        let index = classic_index();
        let config = FindConfig::new("cat".to_string(), "cup".to_string());

        assert!(find_ladder(config, &index).is_err());
    }

    #[test]
    fn find_rejects_malformed_word() {
        let index = classic_index();
        let config = FindConfig::new("c4t".to_string(), "dog".to_string());

        assert!(find_ladder(config, &index).is_err());
    }

    #[test]
    fn find_normalizes_case() {
        let index = classic_index();
        let config = FindConfig::new("CAT".to_string(), "DOG".to_string());

        let result = find_ladder(config, &index).unwrap();
        assert_eq!(result.height, 4);
        assert_eq!(result.start, "cat");
        assert_eq!(result.goal, "dog");
    }

    #[test]
    fn find_echoes_normalized_words_when_no_ladder_exists() {
        let index = load_dictionary_from_slice(&["cat", "dog"], 3).unwrap();
        let config = FindConfig::new("CAT".to_string(), "DOG".to_string());

        // The endpoints render lowercase even without a ladder
        let result = find_ladder(config, &index).unwrap();
        assert!(result.ladder.is_none());
        assert_eq!(result.start, "cat");
        assert_eq!(result.goal, "dog");
    }
}
