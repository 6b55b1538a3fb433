//! Candidate pool for adversarial games
//!
//! The pool holds every word still consistent with the feedback issued so far.
//! It starts as a contiguous window of the dictionary and is replaced wholesale
//! after each guess.

use crate::core::{Dictionary, Word};
use crate::error::GameError;
use rand::Rng;

/// Default number of words in the opening candidate window
pub const DEFAULT_WINDOW_SIZE: usize = 14;

/// Words still in play, in dictionary order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Wrap an explicit list of candidates
    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Take the window of `window_size` words starting at `start`
    ///
    /// A start inside the final `window_size - 1` entries does not wrap around:
    /// the window is clamped to the last `window_size` words instead. A
    /// dictionary shorter than the window yields every word.
    ///
    /// # Errors
    /// Returns `GameError::InvalidWindow` if `window_size` is 0.
    ///
    /// # Examples
    /// ```
    /// use wordle_host::core::Dictionary;
    /// use wordle_host::engine::CandidatePool;
    ///
    /// let dictionary = Dictionary::from_strs(&["aback", "abase", "abate", "abbey", "abbot"]).unwrap();
    /// let pool = CandidatePool::window(&dictionary, 4, 3).unwrap();
    /// let words: Vec<&str> = pool.iter().map(|w| w.text()).collect();
    /// assert_eq!(words, ["abate", "abbey", "abbot"]);
    /// ```
    pub fn window(
        dictionary: &Dictionary,
        start: usize,
        window_size: usize,
    ) -> Result<Self, GameError> {
        if window_size == 0 {
            return Err(GameError::InvalidWindow(window_size));
        }

        let words = dictionary.words();
        let last_full_start = words.len().saturating_sub(window_size);
        let start = start.min(last_full_start);
        let end = (start + window_size).min(words.len());

        Ok(Self {
            words: words[start..end].to_vec(),
        })
    }

    /// Draw a window at a uniformly random start index
    ///
    /// # Errors
    /// Returns `GameError::InvalidWindow` if `window_size` is 0.
    pub fn draw<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        window_size: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let start = rng.random_range(0..dictionary.len());
        log::debug!("Drew candidate window start {start} of {}", dictionary.len());
        Self::window(dictionary, start, window_size)
    }

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

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The only remaining candidate, if exactly one is left
    #[must_use]
    pub fn sole(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// 20 distinct words in a fixed order
    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&[
            "aback", "abase", "abate", "abbey", "abbot", "abhor", "abide", "abled", "abode",
            "abort", "about", "above", "abuse", "abyss", "acorn", "acrid", "actor", "acute",
            "adage", "adapt",
        ])
        .unwrap()
    }

    fn texts(pool: &CandidatePool) -> Vec<&str> {
        pool.iter().map(Word::text).collect()
    }

    #[test]
    fn window_takes_contiguous_slice() {
        let dictionary = dictionary();
        let pool = CandidatePool::window(&dictionary, 2, 14).unwrap();
        assert_eq!(pool.len(), 14);
        assert_eq!(pool.words(), &dictionary.words()[2..16]);
    }

    #[test]
    fn window_at_last_full_start_is_not_clamped() {
        let dictionary = dictionary();
        // 20 - 14 = 6 is the last start with a full slice
        let pool = CandidatePool::window(&dictionary, 6, 14).unwrap();
        assert_eq!(pool.words(), &dictionary.words()[6..20]);
    }

    #[test]
    fn window_near_end_clamps_to_last_entries() {
        let dictionary = dictionary();
        for start in 7..20 {
            let pool = CandidatePool::window(&dictionary, start, 14).unwrap();
            assert_eq!(pool.words(), &dictionary.words()[6..20], "start {start}");
        }
    }

    #[test]
    fn window_larger_than_dictionary_takes_everything() {
        let dictionary = dictionary();
        for start in [0, 5, 19] {
            let pool = CandidatePool::window(&dictionary, start, 50).unwrap();
            assert_eq!(pool.words(), dictionary.words());
        }
    }

    #[test]
    fn window_of_zero_is_rejected() {
        assert_eq!(
            CandidatePool::window(&dictionary(), 0, 0).unwrap_err(),
            GameError::InvalidWindow(0)
        );
    }

    #[test]
    fn draw_is_reproducible_with_seeded_rng() {
        let dictionary = dictionary();
        let first = CandidatePool::draw(&dictionary, 5, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = CandidatePool::draw(&dictionary, 5, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn draw_always_yields_full_window() {
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let pool = CandidatePool::draw(&dictionary, 14, &mut rng).unwrap();
            assert_eq!(pool.len(), 14);
        }
    }

    #[test]
    fn sole_only_with_single_candidate() {
        let dictionary = dictionary();
        let single = CandidatePool::window(&dictionary, 3, 1).unwrap();
        assert_eq!(texts(&single), ["abbey"]);
        assert_eq!(single.sole().map(Word::text), Some("abbey"));

        let pair = CandidatePool::window(&dictionary, 3, 2).unwrap();
        assert!(pair.sole().is_none());
        assert!(CandidatePool::from_words(Vec::new()).sole().is_none());
    }
}
