//! The ordered word list a game is played against

use super::word::{WORD_LENGTH, Word};
use crate::error::GameError;
use rand::Rng;
use rustc_hash::FxHashSet;

/// An ordered, immutable, non-empty sequence of distinct words
///
/// Order matters: candidate windows are contiguous slices of it.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of any duplicate
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if `words` is empty.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, GameError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        Ok(Self { words, index })
    }

    /// Build a dictionary from string slices, skipping entries that are not valid words
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if no entry is a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordle_host::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "slate", "bad"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, GameError> {
        Self::new(words.iter().filter_map(|&s| Word::new(s).ok()))
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Uniformly random word
    ///
    /// Construction rejects empty word lists, so there is always one to pick.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Validate a raw guess and return the dictionary's copy of it
    ///
    /// The guess is lowercased first.
    ///
    /// # Errors
    /// - `GameError::InvalidLength` if the guess is not 5 characters
    /// - `GameError::UnknownWord` if it is not a dictionary word
    pub fn resolve(&self, raw: &str) -> Result<&Word, GameError> {
        let text = raw.to_lowercase();
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(GameError::InvalidLength(len));
        }

        let word = Word::new(text.as_str()).map_err(|_| GameError::UnknownWord(text.clone()))?;
        self.index
            .get(&word)
            .ok_or(GameError::UnknownWord(text))
    }
}
