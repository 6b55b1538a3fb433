//! Standard game: a fixed secret drawn at start

use crate::core::{Dictionary, Pattern, Word};
use rand::Rng;

/// Feedback for one guess in a standard game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardVerdict {
    pub pattern: Pattern,
    pub is_correct: bool,
}

/// A game against a secret that never changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardGame {
    secret: Word,
}

impl StandardGame {
    /// Draw a uniformly random secret from the dictionary
    pub fn start<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> Self {
        let secret = dictionary.choose(rng).clone();
        log::debug!("Standard game secret is '{secret}'");
        Self { secret }
    }

    /// Play against a known secret
    #[must_use]
    pub fn with_secret(secret: Word) -> Self {
        Self { secret }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn guess(&self, word: &Word) -> StandardVerdict {
        let pattern = Pattern::score(word, &self.secret);
        StandardVerdict {
            pattern,
            is_correct: pattern.is_perfect(),
        }
    }
}
