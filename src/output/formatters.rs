//! Formatting utilities for terminal output

use crate::core::{Feedback, Tile, Word};
use colored::{ColoredString, Colorize};

fn tile(letter: u8, tile: Tile) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase() as char);
    match tile {
        Tile::Green => text.black().on_green().bold(),
        Tile::Yellow => text.black().on_yellow().bold(),
        Tile::Grey => text.white().on_bright_black(),
    }
}

/// Render a guess as coloured letter tiles
#[must_use]
pub fn format_feedback(guess: &Word, feedback: Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.tiles())
        .map(|(&letter, t)| tile(letter, t).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_spell_the_guess() {
        colored::control::set_override(false);
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new("stare").unwrap());
        assert_eq!(format_feedback(&guess, feedback), " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
