//! Score command
//!
//! Scores one guess against one target.

use crate::core::{Pattern, Word};
use anyhow::{Context, Result};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub pattern: Pattern,
}

/// Score `guess` against `target`
///
/// Neither word has to be in the dictionary, only well-formed.
///
/// # Errors
///
/// Returns an error if either word is not 5 ASCII letters.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;
    let pattern = Pattern::score(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile::{Hit, Miss, Present};

    #[test]
    fn scores_duplicate_letters() {
        let result = score_words("ABBEY", "label").unwrap();
        assert_eq!(result.guess.text(), "abbey");
        assert_eq!(result.pattern.tiles(), [Present, Miss, Hit, Hit, Miss]);
    }

    #[test]
    fn rejects_malformed_words() {
        assert!(score_words("abc", "label").is_err());
        assert!(score_words("abbey", "lab3l").is_err());
    }
}
