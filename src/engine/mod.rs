//! Game engines
//!
//! The standard engine scores guesses against a fixed secret. The adversarial
//! engine keeps a candidate pool and narrows it after every guess to the
//! feedback group that keeps the most words alive.

mod adversary;
mod partition;
mod pool;
mod standard;

pub use adversary::{Transition, apply, narrow};
pub use partition::{Partition, largest, partition};
pub use pool::{CandidatePool, DEFAULT_WINDOW_SIZE};
pub use standard::{StandardGame, StandardVerdict};
