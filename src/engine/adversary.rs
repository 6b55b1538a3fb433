//! Adversarial host selection
//!
//! The host never commits to an answer. After each guess it keeps whichever
//! feedback group leaves the player with the most candidates.

use super::partition::{largest, partition};
use super::pool::CandidatePool;
use crate::core::{Dictionary, Pattern, Word};
use crate::error::GameError;

/// Result of narrowing a pool with one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The pool going forward; replaces the previous one entirely
    pub pool: CandidatePool,
    /// Feedback reported to the player
    pub pattern: Pattern,
    /// The pool collapsed to exactly the guessed word
    pub is_correct: bool,
    pub remaining: usize,
}

/// Validate a raw guess against the dictionary, then narrow the pool with it
///
/// # Errors
/// - `GameError::InvalidLength` / `GameError::UnknownWord` for a malformed guess
/// - `GameError::PoolExhausted` if the pool is empty
pub fn apply(
    dictionary: &Dictionary,
    pool: &CandidatePool,
    guess: &str,
) -> Result<Transition, GameError> {
    let guess = dictionary.resolve(guess)?;
    narrow(pool, guess)
}

/// Keep the largest feedback group for `guess`
///
/// Ties go to the group whose pattern appeared first while scanning the pool.
///
/// # Errors
/// Returns `GameError::PoolExhausted` if the pool is empty.
///
/// # Examples
/// ```
/// use wordle_host::core::{Dictionary, Word};
/// use wordle_host::engine::{CandidatePool, narrow};
///
/// let dictionary = Dictionary::from_strs(&["crane", "slate", "trace", "grape", "brake"]).unwrap();
/// let pool = CandidatePool::from_words(dictionary.words().to_vec());
/// let step = narrow(&pool, &Word::new("crane").unwrap()).unwrap();
///
/// assert_eq!(step.remaining, 2);
/// assert_eq!(step.pattern.labels(), "miss,hit,hit,miss,hit");
/// assert!(!step.is_correct);
/// ```
pub fn narrow(pool: &CandidatePool, guess: &Word) -> Result<Transition, GameError> {
    let mut groups = partition(pool, guess);
    let Some(best) = largest(&groups) else {
        log::warn!("Guess '{guess}' applied to an empty candidate pool");
        return Err(GameError::PoolExhausted);
    };

    let chosen = groups.swap_remove(best);
    log::debug!(
        "Guess '{guess}' split {} candidates into {} groups; keeping '{}' with {} words",
        pool.len(),
        groups.len() + 1,
        chosen.pattern,
        chosen.len()
    );

    let pool = CandidatePool::from_words(chosen.words);
    let is_correct = pool.sole() == Some(guess);
    let remaining = pool.len();

    Ok(Transition {
        pool,
        pattern: chosen.pattern,
        is_correct,
        remaining,
    })
}
