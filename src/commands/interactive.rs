//! Interactive ladder mode
//!
//! Prompts for the start and goal words, validating each against the
//! dictionary. After five invalid attempts a uniformly random
//! dictionary word is picked instead, so the session always moves
//! forward.

use crate::commands::find::{FindConfig, FindResult, find_ladder};
use crate::core::{Word, WordIndex};
use rand::Rng;
use std::io::{self, Write};

/// Attempts allowed before falling back to a random word
const MAX_ATTEMPTS: usize = 5;

/// Run the interactive mode: select both words, search, and return the result
///
/// # Errors
///
/// Returns an error on I/O failure reading input, or if the search
/// rejects the selected words.
pub fn run_interactive<R: Rng>(
    index: &WordIndex,
    word_size: usize,
    rng: &mut R,
) -> Result<FindResult, String> {
    println!("\nThis program will make the shortest possible");
    println!("word ladder between two {word_size}-letter words.\n");

    let mut input = io::stdin().lines().map_while(Result::ok);
    let (start, goal) = select_word_pair(index, word_size, rng, &mut input)?;
    println!();

    find_ladder(
        FindConfig::new(start.text().to_string(), goal.text().to_string()),
        index,
    )
}

/// Select the start and goal words from an input stream
///
/// The goal must differ from the start; an equal entry is rejected and
/// the goal selection restarts.
///
/// # Errors
///
/// Returns an error when the input stream ends before both words are
/// chosen.
pub fn select_word_pair<R: Rng>(
    index: &WordIndex,
    word_size: usize,
    rng: &mut R,
    input: &mut impl Iterator<Item = String>,
) -> Result<(Word, Word), String> {
    println!("Setting the start {word_size}-letter word...");
    let start = select_word(index, word_size, rng, input)?;
    println!();

    println!("Setting the goal {word_size}-letter word...");
    let goal = loop {
        let goal = select_word(index, word_size, rng, input)?;
        if goal != start {
            break goal;
        }
        println!("  The goal word cannot be the same as the start word ({start}).");
        println!("Setting the goal {word_size}-letter word...");
    };

    Ok((start, goal))
}

/// Select one validated dictionary word from an input stream
///
/// Re-prompts on words of the wrong length or outside the dictionary.
/// After `MAX_ATTEMPTS` invalid entries, picks a uniformly random
/// dictionary word and announces it.
///
/// # Errors
///
/// Returns an error when the input stream ends before a word is chosen.
pub fn select_word<R: Rng>(
    index: &WordIndex,
    word_size: usize,
    rng: &mut R,
    input: &mut impl Iterator<Item = String>,
) -> Result<Word, String> {
    let mut attempts = 0;

    loop {
        prompt(&format!("  Enter a {word_size}-letter word: "))?;

        let Some(line) = input.next() else {
            return Err("Input ended before a word was entered".to_string());
        };
        let entered = line.trim().to_lowercase();
        attempts += 1;

        match Word::new(&entered) {
            Ok(word) if word.len() == word_size => {
                if index.find(&word).is_some() {
                    return Ok(word);
                }
                println!("    Entered word {entered} is not in the dictionary.");
            }
            _ => {
                println!("    Entered word {entered} is not a valid {word_size}-letter word.");
            }
        }

        if attempts >= MAX_ATTEMPTS {
            println!("\n  Picking a random word for you...");
            let word = index.word(rng.random_range(0..index.len())).clone();
            println!("  Your word is: {word}");
            return Ok(word);
        }
    }
}

fn prompt(text: &str) -> Result<(), String> {
    print!("{text}");
    io::stdout().flush().map_err(|e| e.to_string())
}
