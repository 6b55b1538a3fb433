//! Automated player
//!
//! Keeps every dictionary word that agrees with all feedback seen so far and
//! guesses one of them. Used to drive benchmark games against the host.

use crate::core::{Dictionary, Pattern, Word};
use crate::session::GuessRecord;
use rand::Rng;
use rand::seq::IndexedRandom;

/// How the player picks among consistent words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Earliest consistent word in dictionary order
    First,
    /// Uniformly random consistent word
    Random,
}

/// A guesser that only plays words that could still be the answer
pub struct Player<'a> {
    dictionary: &'a Dictionary,
    pick: Pick,
}

impl<'a> Player<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, pick: Pick) -> Self {
        Self { dictionary, pick }
    }

    /// Dictionary words that would have produced every recorded pattern
    #[must_use]
    pub fn consistent(&self, history: &[GuessRecord]) -> Vec<&'a Word> {
        self.dictionary
            .words()
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|record| Pattern::score(&record.guess, candidate) == record.pattern)
            })
            .collect()
    }

    /// Choose the next guess, or `None` if the feedback rules out every word
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        history: &[GuessRecord],
        rng: &mut R,
    ) -> Option<&'a Word> {
        let candidates = self.consistent(history);
        match self.pick {
            Pick::First => candidates.first().copied(),
            Pick::Random => candidates.choose(rng).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&["crane", "slate", "irate", "crate", "grate"]).unwrap()
    }

    fn record(guess: &str, answer: &str) -> GuessRecord {
        let guess = Word::new(guess).unwrap();
        let pattern = Pattern::score(&guess, &Word::new(answer).unwrap());
        GuessRecord { guess, pattern }
    }

    #[test]
    fn empty_history_keeps_everything() {
        let dictionary = dictionary();
        let player = Player::new(&dictionary, Pick::First);
        assert_eq!(player.consistent(&[]).len(), 5);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(player.next_guess(&[], &mut rng).unwrap().text(), "crane");
    }

    #[test]
    fn filters_by_history() {
        let dictionary = dictionary();
        let player = Player::new(&dictionary, Pick::First);
        let history = [record("crane", "grate"), record("irate", "grate")];

        let candidates = player.consistent(&history);
        assert!(candidates.iter().any(|w| w.text() == "grate"));
        assert!(candidates.iter().all(|w| w.text() != "crane"));
    }

    #[test]
    fn impossible_feedback_leaves_nothing() {
        let dictionary = dictionary();
        let player = Player::new(&dictionary, Pick::Random);
        let history = [GuessRecord {
            guess: Word::new("zzzzz").unwrap(),
            pattern: Pattern::PERFECT,
        }];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(player.next_guess(&history, &mut rng).is_none());
    }

    #[test]
    fn random_pick_is_consistent() {
        let dictionary = dictionary();
        let player = Player::new(&dictionary, Pick::Random);
        let history = [record("crane", "slate")];
        let allowed = player.consistent(&history);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            let guess = player.next_guess(&history, &mut rng).unwrap();
            assert!(allowed.contains(&guess));
        }
    }
}
