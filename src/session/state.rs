//! Per-game session state machine
//!
//! A session is created by a start call, mutated only by guesses, and replaced
//! wholesale by the next start. Status moves one way: `Active` to `Won` or `Lost`.

use crate::core::{Dictionary, Pattern, Word};
use crate::engine::{CandidatePool, StandardGame, narrow};
use crate::error::GameError;
use std::sync::Arc;

/// Guesses allowed per game
pub const MAX_ROUNDS: usize = 6;

/// Which engine a session plays against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Standard,
    Adversarial,
}

#[derive(Debug, Clone)]
enum Mode {
    Standard(StandardGame),
    Adversarial(CandidatePool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub pattern: Pattern,
}

/// What a caller learns from one guess
///
/// `answer` is only revealed on a win. `remaining` is only reported in
/// adversarial games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub pattern: Pattern,
    pub is_correct: bool,
    pub remaining: Option<usize>,
    pub answer: Option<Word>,
    pub status: Status,
    /// 1-based number of this guess
    pub round: usize,
}

/// A single game in progress or finished
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Arc<Dictionary>,
    mode: Mode,
    history: Vec<GuessRecord>,
    status: Status,
}

impl Session {
    /// Start a standard game against `game`'s secret
    #[must_use]
    pub fn standard(dictionary: Arc<Dictionary>, game: StandardGame) -> Self {
        Self::new(dictionary, Mode::Standard(game))
    }

    /// Start an adversarial game over `pool`
    ///
    /// # Errors
    /// - `GameError::PoolExhausted` if the pool is empty
    /// - `GameError::UnknownWord` for the first pool word missing from `dictionary`
    pub fn adversarial(
        dictionary: Arc<Dictionary>,
        pool: CandidatePool,
    ) -> Result<Self, GameError> {
        if pool.is_empty() {
            return Err(GameError::PoolExhausted);
        }
        if let Some(stray) = pool.iter().find(|word| !dictionary.contains(word)) {
            log::warn!("Rejecting pool: '{stray}' is not a dictionary word");
            return Err(GameError::UnknownWord(stray.text().to_string()));
        }
        Ok(Self::new(dictionary, Mode::Adversarial(pool)))
    }

    fn new(dictionary: Arc<Dictionary>, mode: Mode) -> Self {
        Self {
            dictionary,
            mode,
            history: Vec::new(),
            status: Status::Active,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ModeKind {
        match self.mode {
            Mode::Standard(_) => ModeKind::Standard,
            Mode::Adversarial(_) => ModeKind::Adversarial,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn rounds_left(&self) -> usize {
        MAX_ROUNDS - self.history.len()
    }

    /// Current candidate count, adversarial games only
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        match &self.mode {
            Mode::Standard(_) => None,
            Mode::Adversarial(pool) => Some(pool.len()),
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Submit a raw guess
    ///
    /// # Errors
    /// - `GameError::SessionTerminal` once the game is won or lost
    /// - `GameError::InvalidLength` / `GameError::UnknownWord` for a bad guess
    /// - `GameError::PoolExhausted` if the pool invariant was broken
    ///
    /// No error changes the session.
    pub fn submit(&mut self, raw: &str) -> Result<GuessOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::SessionTerminal);
        }

        let guess = self.dictionary.resolve(raw)?.clone();

        let (pattern, is_correct, remaining, answer) = match &mut self.mode {
            Mode::Standard(game) => {
                let verdict = game.guess(&guess);
                let answer = verdict.is_correct.then(|| game.secret().clone());
                (verdict.pattern, verdict.is_correct, None, answer)
            }
            Mode::Adversarial(pool) => {
                let step = narrow(pool, &guess)?;
                *pool = step.pool;
                let answer = step.is_correct.then(|| guess.clone());
                (step.pattern, step.is_correct, Some(step.remaining), answer)
            }
        };

        self.history.push(GuessRecord { guess, pattern });

        if is_correct {
            self.status = Status::Won;
        } else if self.history.len() >= MAX_ROUNDS {
            self.status = Status::Lost;
        }

        Ok(GuessOutcome {
            pattern,
            is_correct,
            remaining,
            answer,
            status: self.status,
            round: self.history.len(),
        })
    }
}
