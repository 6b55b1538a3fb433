//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary, plus loading
//! from a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Dictionary;
use crate::error::GameError;

/// The embedded dictionary, in file order
///
/// # Errors
/// Returns `GameError::EmptyDictionary` if the embedded list holds no valid word.
pub fn embedded_dictionary() -> Result<Dictionary, GameError> {
    Dictionary::from_strs(WORDS)
}
