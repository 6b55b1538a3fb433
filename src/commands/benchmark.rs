//! Benchmark command
//!
//! Plays many automated games against the host and collects statistics.
//! Every game runs in its own session, in parallel.

use crate::core::Dictionary;
use crate::player::{Pick, Player};
use crate::session::{Host, MAX_ROUNDS, ModeKind, Status};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Settings for a benchmark run
pub struct BenchmarkConfig {
    pub games: usize,
    pub mode: ModeKind,
    pub window_size: usize,
    pub seed: u64,
    pub pick: Pick,
}

/// Outcome of one automated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub won: bool,
    pub guesses: usize,
    /// Candidates left at the end, adversarial games only
    pub final_remaining: Option<usize>,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub mode: ModeKind,
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Wins by number of guesses taken
    pub distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub average_final_remaining: Option<f64>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game in a fresh host seeded with `seed`
///
/// # Errors
///
/// Returns an error if the host rejects a guess, which the player never
/// should provoke.
pub fn play_game(
    dictionary: &Arc<Dictionary>,
    mode: ModeKind,
    window_size: usize,
    seed: u64,
    pick: Pick,
) -> Result<GameRecord> {
    let mut host = Host::new(Arc::clone(dictionary), StdRng::seed_from_u64(seed));
    let id = match mode {
        ModeKind::Standard => host.start_standard(),
        ModeKind::Adversarial => host.start_adversarial(window_size)?,
    };
    let player = Player::new(dictionary, pick);
    let mut player_rng = StdRng::seed_from_u64(seed.rotate_left(32));

    let mut last_remaining = None;
    loop {
        let Some(session) = host.session(id) else {
            anyhow::bail!("Session {id} vanished mid-game");
        };
        if session.status() != Status::Active {
            break;
        }
        let Some(guess) = player.next_guess(session.history(), &mut player_rng) else {
            anyhow::bail!("Feedback ruled out every dictionary word");
        };
        let guess = guess.text().to_string();
        let outcome = host.submit_guess(id, &guess)?;
        last_remaining = outcome.remaining;
    }

    let session = host
        .session(id)
        .ok_or_else(|| anyhow::anyhow!("Session {id} vanished mid-game"))?;
    Ok(GameRecord {
        won: session.status() == Status::Won,
        guesses: session.history().len(),
        final_remaining: last_remaining,
    })
}

/// Run `config.games` games in parallel
///
/// # Errors
///
/// Returns the first game error encountered.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark(
    dictionary: &Arc<Dictionary>,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let pb = ProgressBar::new(config.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .expect("static progress template")
            .progress_chars("█▓▒░"),
    );

    let records = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let record = play_game(
                dictionary,
                config.mode,
                config.window_size,
                config.seed.wrapping_add(i as u64),
                config.pick,
            );
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_and_clear();
    Ok(summarize(config.mode, &records, start.elapsed()))
}

/// Aggregate per-game records
#[must_use]
pub fn summarize(mode: ModeKind, records: &[GameRecord], duration: Duration) -> BenchmarkResult {
    let total_games = records.len();
    let wins = records.iter().filter(|r| r.won).count();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for record in records.iter().filter(|r| r.won) {
        *distribution.entry(record.guesses).or_insert(0) += 1;
    }

    let winning_guesses: usize = records.iter().filter(|r| r.won).map(|r| r.guesses).sum();
    let average_guesses = if wins > 0 {
        winning_guesses as f64 / wins as f64
    } else {
        0.0
    };

    let remaining: Vec<usize> = records.iter().filter_map(|r| r.final_remaining).collect();
    let average_final_remaining = (!remaining.is_empty())
        .then(|| remaining.iter().sum::<usize>() as f64 / remaining.len() as f64);

    BenchmarkResult {
        mode,
        total_games,
        wins,
        losses: total_games - wins,
        distribution,
        average_guesses,
        average_final_remaining,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Guess counts a benchmark can report
#[must_use]
pub const fn guess_range() -> std::ops::RangeInclusive<usize> {
    1..=MAX_ROUNDS
}
