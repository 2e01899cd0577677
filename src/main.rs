//! Word Ladder - CLI
//!
//! Finds shortest word ladders between equal-length dictionary words,
//! interactively or as a one-shot command.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use word_ladder::{
    commands::{FindConfig, find_ladder, run_benchmark, run_interactive},
    core::WordIndex,
    output::{print_benchmark_result, print_ladder_result},
    wordlists::{
        DICTIONARY,
        loader::{load_dictionary, load_dictionary_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladder finder (breadth-first search over a sorted dictionary)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length for the ladder
    #[arg(short = 'n', long, global = true, default_value = "5")]
    word_size: usize,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default - prompts for both words)
    Interactive,

    /// Find the shortest ladder between two specific words
    Find {
        /// The starting word
        start: String,

        /// The goal word
        goal: String,
    },

    /// Benchmark search performance on random word pairs
    Benchmark {
        /// Number of random pairs to search
        #[arg(short = 'c', long, default_value = "100")]
        count: usize,

        /// RNG seed for reproducible pair sampling
        #[arg(short = 's', long, default_value = "0")]
        seed: u64,
    },
}

/// Load the dictionary based on the -d flag
fn load_index(dictionary: &str, word_size: usize) -> Result<WordIndex> {
    let index = match dictionary {
        "embedded" => load_dictionary_from_slice(DICTIONARY, word_size)
            .context("embedded dictionary")?,
        path => load_dictionary(path, word_size)
            .with_context(|| format!("dictionary file '{path}'"))?,
    };
    Ok(index)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.word_size < 2 {
        bail!("Word size must be at least 2 (got {})", cli.word_size);
    }

    let index = load_index(&cli.dictionary, cli.word_size)?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive_command(&index, cli.word_size),
        Commands::Find { start, goal } => run_find_command(&index, start, goal),
        Commands::Benchmark { count, seed } => {
            let result = run_benchmark(&index, count, seed);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_interactive_command(index: &WordIndex, word_size: usize) -> Result<()> {
    let mut rng = rand::rng();
    let result =
        run_interactive(index, word_size, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    print_ladder_result(&result);
    Ok(())
}

fn run_find_command(index: &WordIndex, start: String, goal: String) -> Result<()> {
    let config = FindConfig::new(start, goal);
    let result = find_ladder(config, index).map_err(|e| anyhow::anyhow!(e))?;

    print_ladder_result(&result);
    Ok(())
}
