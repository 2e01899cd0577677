//! Display functions for command results

use super::formatters::{distribution_bar, format_rung};
use crate::commands::{BenchmarkResult, FindResult};
use colored::Colorize;

/// Print the result of a ladder search
pub fn print_ladder_result(result: &FindResult) {
    match &result.ladder {
        None => {
            println!(
                "There is no possible word ladder from {} to {}",
                result.start.bright_yellow(),
                result.goal.bright_yellow()
            );
        }
        Some(words) => {
            println!("{}", "Shortest word ladder found!".green().bold());
            let mut previous: Option<&str> = None;
            for word in words {
                println!("\t\t\t{}", format_rung(previous, word));
                previous = Some(word);
            }
        }
    }
    println!("Word ladder height = {}", result.height);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs searched:   {}", result.total_pairs);
    println!(
        "   Connected:        {}",
        format!("{}", result.connected).green()
    );
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    if result.connected > 0 {
        println!(
            "   Average height:   {}",
            format!("{:.2}", result.average_height)
                .bright_yellow()
                .bold()
        );
        println!("   Shortest ladder:  {}", result.min_height);
        println!("   Tallest ladder:   {}", result.max_height);
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.connected > 0 {
        println!("\n📈 {}", "Height distribution:".bright_cyan().bold());
        let max_count = *result.height_distribution.values().max().unwrap_or(&1);
        let mut heights: Vec<usize> = result.height_distribution.keys().copied().collect();
        heights.sort_unstable();

        for height in heights {
            let count = result.height_distribution[&height];
            let pct = (count as f64 / result.connected as f64) * 100.0;
            let bar = distribution_bar(count, max_count, 40);
            println!("   {height:3}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
