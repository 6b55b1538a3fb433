//! Errors reported by the game engine and sessions
//!
//! Every variant is recoverable: a rejected call leaves session state untouched.

use crate::session::SessionId;

/// Errors returned by dictionary lookups, the engine and sessions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Guess length is not 5 characters
    #[error("Invalid guess: must be 5 letters long, got {0}")]
    InvalidLength(usize),

    /// Guess is not in the dictionary
    #[error("Not a valid word: '{0}'")]
    UnknownWord(String),

    /// No session exists for the handle
    #[error("No game in progress for session {0}")]
    SessionNotStarted(SessionId),

    /// The session was already won or lost
    #[error("Game is over; start a new game to keep playing")]
    SessionTerminal,

    /// The candidate pool was empty when a guess was applied
    #[error("Candidate pool is exhausted")]
    PoolExhausted,

    /// A candidate window must hold at least one word
    #[error("Candidate window size must be at least 1, got {0}")]
    InvalidWindow(usize),

    /// The dictionary holds no playable word
    #[error("Dictionary contains no valid 5-letter words")]
    EmptyDictionary,
}
