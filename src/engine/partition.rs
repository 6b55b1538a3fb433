//! Partitioning a candidate pool by the feedback a guess would produce
//!
//! Given a guess, every candidate is scored as if it were the answer and the
//! candidates are grouped by the resulting pattern.

use super::pool::CandidatePool;
use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Candidates that would all produce the same feedback for a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub pattern: Pattern,
    pub words: Vec<Word>,
}

impl Partition {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Group the pool by the pattern each candidate produces with `guess`
///
/// Groups come back in the order their pattern was first seen while scanning
/// the pool; words inside a group keep pool order.
///
/// # Examples
/// ```
/// use wordle_host::core::{Dictionary, Word};
/// use wordle_host::engine::{CandidatePool, partition};
///
/// let dictionary = Dictionary::from_strs(&["crane", "slate", "grape", "brake"]).unwrap();
/// let pool = CandidatePool::from_words(dictionary.words().to_vec());
/// let groups = partition(&pool, &Word::new("crane").unwrap());
///
/// assert_eq!(groups.len(), 3);
/// assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), 4);
/// ```
#[must_use]
pub fn partition(pool: &CandidatePool, guess: &Word) -> Vec<Partition> {
    let mut slots: FxHashMap<Pattern, usize> = FxHashMap::default();
    let mut groups: Vec<Partition> = Vec::new();

    for candidate in pool {
        let pattern = Pattern::score(guess, candidate);
        let slot = *slots.entry(pattern).or_insert_with(|| {
            groups.push(Partition {
                pattern,
                words: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].words.push(candidate.clone());
    }

    groups
}

/// Index of the largest group; the earliest one wins a tie
#[must_use]
pub fn largest(groups: &[Partition]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, group) in groups.iter().enumerate() {
        if best.is_none_or(|(_, size)| group.len() > size) {
            best = Some((index, group.len()));
        }
    }
    best.map(|(index, _)| index)
}
