//! Benchmark command
//!
//! Runs many random start/goal searches against one dictionary and
//! aggregates ladder heights. Each search owns a fresh visited set, so
//! the searches are independent and run in parallel.

use crate::core::WordIndex;
use crate::search::{VisitedSet, find_shortest_ladder};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub connected: usize,
    pub unreachable: usize,
    pub average_height: f64,
    pub min_height: usize,
    pub max_height: usize,
    pub height_distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Run `count` random-pair searches over the index
///
/// Pairs are drawn with a seeded RNG so runs are reproducible. Heights
/// are aggregated over the connected pairs only.
///
/// # Panics
///
/// Panics if the index holds fewer than two words (the loader rejects
/// such dictionaries before a benchmark can start).
#[must_use]
pub fn run_benchmark(index: &WordIndex, count: usize, seed: u64) -> BenchmarkResult {
    assert!(index.len() >= 2, "benchmark needs at least two words");

    let mut rng = StdRng::seed_from_u64(seed);
    let pairs: Vec<(usize, usize)> = (0..count)
        .map(|_| {
            let start = rng.random_range(0..index.len());
            let goal = loop {
                let goal = rng.random_range(0..index.len());
                if goal != start {
                    break goal;
                }
            };
            (start, goal)
        })
        .collect();

    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start_time = Instant::now();

    let heights: Vec<Option<usize>> = pairs
        .par_iter()
        .map(|&(start_pos, goal_pos)| {
            let start = index.word(start_pos);
            let goal = index.word(goal_pos);
            let mut visited = VisitedSet::new(index.len());

            // Pairs are distinct words drawn from the index itself, so
            // the search cannot reject them.
            let height = find_shortest_ladder(index, &mut visited, start, goal)
                .ok()
                .flatten()
                .map(|ladder| ladder.len());

            pb.inc(1);
            height
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start_time.elapsed();

    let mut height_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_height = 0usize;
    let mut min_height = usize::MAX;
    let mut max_height = 0usize;
    let mut connected = 0usize;

    for height in heights.iter().flatten() {
        connected += 1;
        total_height += height;
        min_height = min_height.min(*height);
        max_height = max_height.max(*height);
        *height_distribution.entry(*height).or_insert(0) += 1;
    }

    let average_height = if connected > 0 {
        total_height as f64 / connected as f64
    } else {
        0.0
    };

    BenchmarkResult {
        total_pairs: pairs.len(),
        connected,
        unreachable: pairs.len() - connected,
        average_height,
        min_height: if connected > 0 { min_height } else { 0 },
        max_height,
        height_distribution,
        duration,
        searches_per_second: pairs.len() as f64 / duration.as_secs_f64(),
    }
}
