//! Game sessions and the host that owns them

mod host;
mod hotseat;
mod state;

pub use host::{Host, SessionId};
pub use hotseat::{HotseatOutcome, HotseatSession, HotseatStatus, Seat};
pub use state::{GuessOutcome, GuessRecord, MAX_ROUNDS, ModeKind, Session, Status};
