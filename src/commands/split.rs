//! Split command
//!
//! Shows how the adversarial host would partition a pool for one guess.

use crate::core::{Dictionary, Word};
use crate::engine::{CandidatePool, Partition, largest, partition};
use crate::error::GameError;
use anyhow::{Context, Result};

/// Result of partitioning a pool
pub struct SplitResult {
    pub guess: Word,
    pub pool_size: usize,
    /// Groups in first-seen order
    pub groups: Vec<Partition>,
    /// Index into `groups` of the group the host keeps
    pub kept: usize,
}

/// Partition `pool` by `guess` and report the group the host keeps
///
/// # Errors
///
/// Returns an error if the guess is not a dictionary word or the pool is empty.
pub fn split_pool(
    dictionary: &Dictionary,
    pool: &CandidatePool,
    guess: &str,
) -> Result<SplitResult> {
    let guess = dictionary
        .resolve(guess)
        .with_context(|| format!("Cannot split on '{guess}'"))?
        .clone();
    let groups = partition(pool, &guess);
    let kept = largest(&groups).ok_or(GameError::PoolExhausted)?;

    Ok(SplitResult {
        guess,
        pool_size: pool.len(),
        groups,
        kept,
    })
}

/// Build a pool from explicit comma-separated words, each checked against the dictionary
///
/// # Errors
///
/// Returns an error if any word is malformed or unknown.
pub fn pool_from_list(dictionary: &Dictionary, list: &str) -> Result<CandidatePool> {
    let words = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| dictionary.resolve(s).cloned())
        .collect::<Result<Vec<_>, _>>()?;
    if words.is_empty() {
        return Err(GameError::PoolExhausted.into());
    }
    Ok(CandidatePool::from_words(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&["crane", "slate", "trace", "grape", "brake"]).unwrap()
    }

    #[test]
    fn split_reports_kept_group() {
        let dictionary = dictionary();
        let pool = CandidatePool::from_words(dictionary.words().to_vec());
        let result = split_pool(&dictionary, &pool, "crane").unwrap();

        assert_eq!(result.pool_size, 5);
        assert_eq!(result.groups.len(), 4);
        assert_eq!(result.kept, 3);
        assert_eq!(result.groups[result.kept].len(), 2);
    }

    #[test]
    fn split_rejects_unknown_guess() {
        let dictionary = dictionary();
        let pool = CandidatePool::from_words(dictionary.words().to_vec());
        assert!(split_pool(&dictionary, &pool, "zebra").is_err());
    }

    #[test]
    fn split_rejects_empty_pool() {
        let dictionary = dictionary();
        let pool = CandidatePool::from_words(Vec::new());
        assert!(split_pool(&dictionary, &pool, "crane").is_err());
    }

    #[test]
    fn pool_from_list_keeps_order() {
        let dictionary = dictionary();
        let pool = pool_from_list(&dictionary, "grape, crane,,slate").unwrap();
        let texts: Vec<&str> = pool.iter().map(Word::text).collect();
        assert_eq!(texts, ["grape", "crane", "slate"]);

        assert!(pool_from_list(&dictionary, "grape,zebra").is_err());
        assert!(pool_from_list(&dictionary, " , ").is_err());
    }
}
