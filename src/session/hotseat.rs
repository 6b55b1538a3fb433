//! Two-player hotseat game
//!
//! Both seats guess the same secret in turn, seat one first, each with its own
//! board of up to `MAX_ROUNDS` guesses. The first correct guess wins; once both
//! boards are full the game is drawn.

use super::state::{GuessRecord, MAX_ROUNDS};
use crate::core::{Dictionary, Pattern, Word};
use crate::engine::StandardGame;
use crate::error::GameError;
use std::fmt;
use std::sync::Arc;

/// One of the two players sharing the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("Player 1"),
            Self::Two => f.write_str("Player 2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotseatStatus {
    Active,
    Won(Seat),
    Draw,
}

impl HotseatStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// What the table learns from one hotseat guess
///
/// `answer` is revealed when the game ends, by a win or a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotseatOutcome {
    pub seat: Seat,
    pub pattern: Pattern,
    pub is_correct: bool,
    pub answer: Option<Word>,
    pub status: HotseatStatus,
    /// 1-based number of this guess on the seat's own board
    pub round: usize,
}

/// A hotseat game in progress or finished
#[derive(Debug, Clone)]
pub struct HotseatSession {
    dictionary: Arc<Dictionary>,
    game: StandardGame,
    boards: [Vec<GuessRecord>; 2],
    turn: Seat,
    status: HotseatStatus,
}

impl HotseatSession {
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, game: StandardGame) -> Self {
        Self {
            dictionary,
            game,
            boards: [Vec::new(), Vec::new()],
            turn: Seat::One,
            status: HotseatStatus::Active,
        }
    }

    /// Seat expected to guess next; meaningless once the game is over
    #[must_use]
    pub const fn turn(&self) -> Seat {
        self.turn
    }

    #[must_use]
    pub const fn status(&self) -> HotseatStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self, seat: Seat) -> &[GuessRecord] {
        &self.boards[seat.index()]
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Submit a raw guess for the seat whose turn it is
    ///
    /// # Errors
    /// - `GameError::SessionTerminal` once the game is won or drawn
    /// - `GameError::InvalidLength` / `GameError::UnknownWord` for a bad guess
    ///
    /// A rejected guess keeps the turn with the same seat.
    pub fn submit(&mut self, raw: &str) -> Result<HotseatOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::SessionTerminal);
        }

        let guess = self.dictionary.resolve(raw)?.clone();
        let verdict = self.game.guess(&guess);
        let seat = self.turn;

        let board = &mut self.boards[seat.index()];
        board.push(GuessRecord {
            guess,
            pattern: verdict.pattern,
        });
        let round = board.len();

        if verdict.is_correct {
            self.status = HotseatStatus::Won(seat);
        } else if self.boards.iter().all(|b| b.len() >= MAX_ROUNDS) {
            self.status = HotseatStatus::Draw;
        } else {
            self.turn = seat.other();
        }

        let answer = self
            .status
            .is_terminal()
            .then(|| self.game.secret().clone());

        Ok(HotseatOutcome {
            seat,
            pattern: verdict.pattern,
            is_correct: verdict.is_correct,
            answer,
            status: self.status,
            round,
        })
    }
}
