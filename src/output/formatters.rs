//! Formatting utilities for terminal output

use crate::core::{Pattern, Tile, Word};
use colored::Colorize;

/// Render a guess with each letter on its tile colour, e.g. `[C][R][A][N][E]`
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(pattern.tiles())
        .map(|(letter, tile)| {
            let cell = format!(" {letter} ");
            match tile {
                Tile::Hit => cell.black().on_green().to_string(),
                Tile::Present => cell.black().on_yellow().to_string(),
                Tile::Miss => cell.white().on_bright_black().to_string(),
            }
        })
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
