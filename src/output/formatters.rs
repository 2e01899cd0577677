//! Formatting helpers for ladder output

use colored::Colorize;

/// Format one ladder rung, highlighting the letter substituted since
/// the previous rung
///
/// The first rung (no previous word) prints unhighlighted.
#[must_use]
pub fn format_rung(previous: Option<&str>, word: &str) -> String {
    let Some(prev) = previous else {
        return word.to_string();
    };
    if prev.len() != word.len() {
        return word.to_string();
    }

    word.chars()
        .zip(prev.chars())
        .map(|(c, p)| {
            if c == p {
                c.to_string()
            } else {
                c.to_string().bright_yellow().bold().to_string()
            }
        })
        .collect()
}

/// A proportional bar for height-distribution charts
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let bar_len = if max_count > 0 {
        (count * width / max_count).max(usize::from(count > 0))
    } else {
        0
    };
    format!(
        "{}{}",
        "█".repeat(bar_len).green(),
        "░".repeat(width.saturating_sub(bar_len)).bright_black()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rung_is_plain() {
        colored::control::set_override(false);
        assert_eq!(format_rung(None, "cat"), "cat");
    }

    #[test]
    fn rung_without_color_keeps_letters() {
        colored::control::set_override(false);
        assert_eq!(format_rung(Some("cat"), "cot"), "cot");
    }

    #[test]
    fn mismatched_lengths_print_plain() {
        colored::control::set_override(false);
        assert_eq!(format_rung(Some("cat"), "cats"), "cats");
    }

    #[test]
    fn empty_distribution_bar() {
        colored::control::set_override(false);
        let bar = distribution_bar(0, 0, 10);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 0);
    }

    #[test]
    fn full_distribution_bar() {
        colored::control::set_override(false);
        let bar = distribution_bar(5, 5, 10);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 10);
    }

    #[test]
    fn nonzero_count_always_shows_a_mark() {
        colored::control::set_override(false);
        let bar = distribution_bar(1, 1000, 10);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 1);
    }
}
