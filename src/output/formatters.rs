//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Explains the emoji tiles
pub const LEGEND: &str = "⬜ = Not in word   🟨 = Wrong position   🟩 = Correct";

/// One letter as a colored tile
#[must_use]
pub fn letter_tile(letter: u8, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// A guess rendered as five colored tiles
#[must_use]
pub fn feedback_tiles(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| letter_tile(letter, verdict).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).max(usize::from(value > 0)).min(width)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `count` followed by the singular or plural noun
#[must_use]
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{count} {}", if count == 1 { singular } else { plural })
}

/// Share of `total` as a whole percentage, 0 when `total` is 0
#[must_use]
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_keep_letter_order() {
        let guess = Word::new("slate").unwrap();
        let feedback = Feedback::evaluate(&guess, &Word::new("crane").unwrap());
        assert_eq!(strip_ansi(&feedback_tiles(&guess, &feedback)), " S  L  A  T  E ");
    }

    #[test]
    fn strip_ansi_removes_color_codes() {
        assert_eq!(strip_ansi("\u{1b}[1;30;42m S \u{1b}[0m"), " S ");
        assert_eq!(strip_ansi(" L "), " L ");
    }

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                // Skip the CSI sequence up to its final letter
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_shows_small_nonzero_values() {
        assert_eq!(create_progress_bar(1, 1000, 10), "█░░░░░░░░░");
        assert_eq!(create_progress_bar(0, 0, 4), "░░░░");
    }

    #[test]
    fn plural_and_percent() {
        assert_eq!(plural(1, "guess", "guesses"), "1 guess");
        assert_eq!(plural(3, "guess", "guesses"), "3 guesses");
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!(percent(3, 0).abs() < f64::EPSILON);
    }
}
