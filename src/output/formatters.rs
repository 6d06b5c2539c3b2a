//! Formatting utilities for terminal output

use crate::core::{Feedback, Row};
use colored::{ColoredString, Colorize};

/// One letter cell, colored by its feedback
#[must_use]
pub fn tile(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Feedback::Hit => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
        Feedback::Empty => text.normal(),
    }
}

/// A scored row as a strip of colored tiles
#[must_use]
pub fn row_tiles(row: &Row) -> String {
    row.guess()
        .text()
        .chars()
        .zip(row.pattern().symbols())
        .map(|(letter, &feedback)| tile(letter, feedback).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural suffix for counts in messages
#[must_use]
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
