//! Game host: owns every session, keyed by handle
//!
//! Sessions never share state. All mutation goes through `&mut Host`, so two
//! guesses against the same session are always applied one after the other.

use super::hotseat::{HotseatOutcome, HotseatSession};
use super::state::{GuessOutcome, Session};
use crate::core::Dictionary;
use crate::engine::{CandidatePool, StandardGame};
use crate::error::GameError;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Opaque handle for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Orchestrates session lifecycles over one shared, read-only dictionary
pub struct Host<R> {
    dictionary: Arc<Dictionary>,
    rng: R,
    sessions: FxHashMap<SessionId, Session>,
    hotseats: FxHashMap<SessionId, HotseatSession>,
    next_id: u64,
}

impl<R: Rng> Host<R> {
    /// Create a host drawing secrets and windows from `rng`
    pub fn new(dictionary: Arc<Dictionary>, rng: R) -> Self {
        Self {
            dictionary,
            rng,
            sessions: FxHashMap::default(),
            hotseats: FxHashMap::default(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Start a standard game with a random secret
    pub fn start_standard(&mut self) -> SessionId {
        let session = self.new_standard();
        self.insert(session)
    }

    /// Start an adversarial game over a random window of `window_size` words
    ///
    /// # Errors
    /// Returns `GameError::InvalidWindow` if `window_size` is 0.
    pub fn start_adversarial(&mut self, window_size: usize) -> Result<SessionId, GameError> {
        let session = self.new_adversarial(window_size)?;
        Ok(self.insert(session))
    }

    /// Start a two-player hotseat game with a random secret
    pub fn start_hotseat(&mut self) -> SessionId {
        let game = self.new_hotseat();
        let id = self.allocate();
        log::info!("Session {id} started (hotseat mode)");
        self.hotseats.insert(id, game);
        id
    }

    /// Replace a session with a fresh standard game under the same handle
    ///
    /// # Errors
    /// Returns `GameError::SessionNotStarted` if `id` is unknown.
    pub fn restart_standard(&mut self, id: SessionId) -> Result<(), GameError> {
        self.ensure_known(id)?;
        let session = self.new_standard();
        self.replace(id, session);
        Ok(())
    }

    /// Replace a session with a fresh adversarial game under the same handle
    ///
    /// # Errors
    /// - `GameError::SessionNotStarted` if `id` is unknown
    /// - `GameError::InvalidWindow` if `window_size` is 0
    pub fn restart_adversarial(
        &mut self,
        id: SessionId,
        window_size: usize,
    ) -> Result<(), GameError> {
        self.ensure_known(id)?;
        let session = self.new_adversarial(window_size)?;
        self.replace(id, session);
        Ok(())
    }

    /// Replace a session with a fresh hotseat game under the same handle
    ///
    /// # Errors
    /// Returns `GameError::SessionNotStarted` if `id` is unknown.
    pub fn restart_hotseat(&mut self, id: SessionId) -> Result<(), GameError> {
        self.ensure_known(id)?;
        let game = self.new_hotseat();
        self.sessions.remove(&id);
        log::info!("Session {id} restarted (hotseat mode)");
        self.hotseats.insert(id, game);
        Ok(())
    }

    /// Drop a session of any kind; returns whether it existed
    pub fn end(&mut self, id: SessionId) -> bool {
        let existed =
            self.sessions.remove(&id).is_some() | self.hotseats.remove(&id).is_some();
        if existed {
            log::info!("Session {id} ended");
        }
        existed
    }

    #[must_use]
    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    #[must_use]
    pub fn hotseat(&self, id: SessionId) -> Option<&HotseatSession> {
        self.hotseats.get(&id)
    }

    /// Live sessions of every kind
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len() + self.hotseats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty() && self.hotseats.is_empty()
    }

    /// Submit a guess to one session
    ///
    /// # Errors
    /// `GameError::SessionNotStarted` for an unknown handle, otherwise whatever
    /// `Session::submit` reports.
    pub fn submit_guess(&mut self, id: SessionId, guess: &str) -> Result<GuessOutcome, GameError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(GameError::SessionNotStarted(id))?;

        match session.submit(guess) {
            Ok(outcome) => {
                log::debug!(
                    "Session {id} round {}: '{guess}' -> {} ({:?}, remaining {:?})",
                    outcome.round,
                    outcome.pattern,
                    outcome.status,
                    outcome.remaining
                );
                Ok(outcome)
            }
            Err(err) => {
                log::debug!("Session {id} rejected '{guess}': {err}");
                Err(err)
            }
        }
    }

    /// Submit a guess for whichever seat is up in a hotseat game
    ///
    /// # Errors
    /// `GameError::SessionNotStarted` for an unknown handle, otherwise whatever
    /// `HotseatSession::submit` reports.
    pub fn submit_hotseat_guess(
        &mut self,
        id: SessionId,
        guess: &str,
    ) -> Result<HotseatOutcome, GameError> {
        let game = self
            .hotseats
            .get_mut(&id)
            .ok_or(GameError::SessionNotStarted(id))?;

        let outcome = game.submit(guess);
        match &outcome {
            Ok(step) => log::debug!(
                "Session {id} {} round {}: '{guess}' -> {} ({:?})",
                step.seat,
                step.round,
                step.pattern,
                step.status
            ),
            Err(err) => log::debug!("Session {id} rejected '{guess}': {err}"),
        }
        outcome
    }

    fn new_standard(&mut self) -> Session {
        let game = StandardGame::start(&self.dictionary, &mut self.rng);
        Session::standard(Arc::clone(&self.dictionary), game)
    }

    fn new_adversarial(&mut self, window_size: usize) -> Result<Session, GameError> {
        let pool = CandidatePool::draw(&self.dictionary, window_size, &mut self.rng)?;
        log::debug!(
            "Adversarial window: {}",
            pool.iter()
                .map(|w| w.text())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Session::adversarial(Arc::clone(&self.dictionary), pool)
    }

    fn new_hotseat(&mut self) -> HotseatSession {
        let game = StandardGame::start(&self.dictionary, &mut self.rng);
        HotseatSession::new(Arc::clone(&self.dictionary), game)
    }

    fn allocate(&mut self) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, session: Session) -> SessionId {
        let id = self.allocate();
        log::info!("Session {id} started ({:?} mode)", session.mode());
        self.sessions.insert(id, session);
        id
    }

    fn replace(&mut self, id: SessionId, session: Session) {
        log::info!("Session {id} restarted ({:?} mode)", session.mode());
        self.hotseats.remove(&id);
        self.sessions.insert(id, session);
    }

    fn ensure_known(&self, id: SessionId) -> Result<(), GameError> {
        if self.sessions.contains_key(&id) || self.hotseats.contains_key(&id) {
            Ok(())
        } else {
            Err(GameError::SessionNotStarted(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{HotseatStatus, ModeKind, Seat, Status};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn host() -> Host<StdRng> {
        let dictionary = Dictionary::from_strs(&[
            "crane", "slate", "trace", "grape", "brake", "pound", "flick", "jumbo", "wedge",
            "mirth", "vouch", "glyph", "nymph", "squib", "dwarf", "kayak",
        ])
        .unwrap();
        Host::new(Arc::new(dictionary), StdRng::seed_from_u64(2024))
    }

    #[test]
    fn unknown_handle_is_not_started() {
        let mut host = host();
        let id = host.start_standard();
        assert!(host.end(id));

        assert_eq!(
            host.submit_guess(id, "crane").unwrap_err(),
            GameError::SessionNotStarted(id)
        );
        assert_eq!(
            host.restart_standard(id).unwrap_err(),
            GameError::SessionNotStarted(id)
        );
        assert!(!host.end(id));
    }

    #[test]
    fn sessions_are_isolated() {
        let mut host = host();
        let first = host.start_adversarial(14).unwrap();
        let second = host.start_adversarial(14).unwrap();
        assert_ne!(first, second);

        let before = host.session(second).unwrap().remaining();
        host.submit_guess(first, "crane").unwrap();

        assert_eq!(host.session(first).unwrap().history().len(), 1);
        assert!(host.session(second).unwrap().history().is_empty());
        assert_eq!(host.session(second).unwrap().remaining(), before);
    }

    #[test]
    fn adversarial_window_size_is_honored() {
        let mut host = host();
        let id = host.start_adversarial(14).unwrap();
        assert_eq!(host.session(id).unwrap().remaining(), Some(14));

        let small = host.start_adversarial(3).unwrap();
        assert_eq!(host.session(small).unwrap().remaining(), Some(3));

        assert_eq!(
            host.start_adversarial(0).unwrap_err(),
            GameError::InvalidWindow(0)
        );
    }

    #[test]
    fn restart_replaces_wholesale() {
        let mut host = host();
        let id = host.start_standard();
        host.submit_guess(id, "crane").unwrap();

        host.restart_adversarial(id, 5).unwrap();
        let session = host.session(id).unwrap();
        assert_eq!(session.mode(), ModeKind::Adversarial);
        assert!(session.history().is_empty());
        assert_eq!(session.status(), Status::Active);
        assert_eq!(session.remaining(), Some(5));
    }

    #[test]
    fn restart_revives_finished_game() {
        let mut host = host();
        let id = host.start_adversarial(1).unwrap();

        // A one-word window holds the only answer left; find it and win
        let word = host.dictionary().words().iter().find(|w| {
            let mut trial = host.session(id).unwrap().clone();
            trial.submit(w.text()).is_ok_and(|o| o.is_correct)
        });
        let word = word.unwrap().text().to_string();
        assert!(host.submit_guess(id, &word).unwrap().is_correct);
        assert_eq!(
            host.submit_guess(id, &word).unwrap_err(),
            GameError::SessionTerminal
        );

        host.restart_standard(id).unwrap();
        assert_eq!(host.session(id).unwrap().status(), Status::Active);
        assert!(host.submit_guess(id, "crane").is_ok());
    }

    #[test]
    fn seeded_hosts_deal_identical_games() {
        let mut a = host();
        let mut b = host();
        let ida = a.start_adversarial(4).unwrap();
        let idb = b.start_adversarial(4).unwrap();

        for guess in ["crane", "pound", "glyph"] {
            assert_eq!(
                a.submit_guess(ida, guess).unwrap(),
                b.submit_guess(idb, guess).unwrap()
            );
        }
    }

    #[test]
    fn end_and_len() {
        let mut host = host();
        assert!(host.is_empty());
        let a = host.start_standard();
        let _b = host.start_standard();
        assert_eq!(host.len(), 2);
        assert!(host.end(a));
        assert_eq!(host.len(), 1);
    }

    #[test]
    fn hotseat_games_alternate_seats() {
        let mut host = host();
        let id = host.start_hotseat();
        assert!(host.session(id).is_none());

        let first = host.submit_hotseat_guess(id, "crane").unwrap();
        assert_eq!(first.seat, Seat::One);
        assert_eq!(host.hotseat(id).unwrap().turn(), Seat::Two);
        assert_eq!(
            host.submit_guess(id, "crane").unwrap_err(),
            GameError::SessionNotStarted(id)
        );
    }

    #[test]
    fn hotseat_restart_and_end() {
        let mut host = host();
        let id = host.start_hotseat();
        host.submit_hotseat_guess(id, "crane").unwrap();

        host.restart_hotseat(id).unwrap();
        let game = host.hotseat(id).unwrap();
        assert_eq!(game.status(), HotseatStatus::Active);
        assert_eq!(game.turn(), Seat::One);
        assert!(game.history(Seat::One).is_empty());

        host.restart_standard(id).unwrap();
        assert!(host.hotseat(id).is_none());
        assert_eq!(host.len(), 1);

        assert!(host.end(id));
        assert!(host.is_empty());
        assert_eq!(
            host.submit_hotseat_guess(id, "crane").unwrap_err(),
            GameError::SessionNotStarted(id)
        );
    }
}
