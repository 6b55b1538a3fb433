//! Core domain types for the game
//!
//! Words, feedback patterns and the dictionary. Everything here is pure and
//! immutable once built.

mod dictionary;
mod pattern;
mod word;

pub use dictionary::Dictionary;
pub use pattern::{Pattern, Tile};
pub use word::{WORD_LENGTH, Word, WordError};
