//! Interactive play mode
//!
//! Text-based game loop against the host, in either mode.

use crate::output::formatters::colored_guess;
use crate::session::{Host, MAX_ROUNDS, ModeKind, SessionId, Status};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Games played in one interactive run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub games: usize,
    pub wins: usize,
}

enum Input {
    Guess(String),
    NewGame,
    Quit,
}

/// Run the interactive game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if a game cannot be started.
pub fn run_play<G: Rng, R: BufRead, W: Write>(
    host: &mut Host<G>,
    mode: ModeKind,
    window_size: usize,
    mut input: R,
    mut out: W,
) -> Result<PlaySummary> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    match mode {
        ModeKind::Standard => {
            writeln!(out, "║                   Wordle Host - Standard Mode                ║")?;
        }
        ModeKind::Adversarial => {
            writeln!(out, "║                   Wordle Host - Hard Mode                    ║")?;
        }
    }
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the 5-letter word in {MAX_ROUNDS} tries.")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    let mut summary = PlaySummary::default();
    let mut id = start(host, mode, window_size, None)?;
    summary.games += 1;

    loop {
        let Some(session) = host.session(id) else {
            anyhow::bail!("Session {id} disappeared");
        };
        let round = session.history().len() + 1;

        let line = if session.status().is_terminal() {
            prompt(&mut input, &mut out, "Play again? (yes/no)")?
        } else {
            prompt(&mut input, &mut out, &format!("Guess {round}/{MAX_ROUNDS}"))?
        };
        let Some(line) = line else {
            break;
        };

        let finished = session.status().is_terminal();
        let command = match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Input::Quit,
            "new" | "n" => Input::NewGame,
            "yes" | "y" if finished => Input::NewGame,
            "no" if finished => Input::Quit,
            _ => Input::Guess(line),
        };

        match command {
            Input::Quit => break,
            Input::NewGame => {
                id = start(host, mode, window_size, Some(id))?;
                summary.games += 1;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Input::Guess(guess) => match host.submit_guess(id, &guess) {
                Ok(outcome) => {
                    let Some(record) = host.session(id).and_then(|s| s.history().last()) else {
                        anyhow::bail!("Guess was not recorded");
                    };
                    write!(out, "  {}", colored_guess(&record.guess, outcome.pattern))?;
                    if let Some(remaining) = outcome.remaining {
                        write!(out, "  {}", format!("({remaining} left)").bright_black())?;
                    }
                    writeln!(out)?;

                    match outcome.status {
                        Status::Won => {
                            summary.wins += 1;
                            let answer = outcome
                                .answer
                                .map(|w| w.text().to_uppercase())
                                .unwrap_or_default();
                            writeln!(
                                out,
                                "\n{} The word was {}. Solved in {} {}.\n",
                                "🎉 Solved!".bright_green().bold(),
                                answer.bright_white().bold(),
                                outcome.round,
                                if outcome.round == 1 { "guess" } else { "guesses" }
                            )?;
                        }
                        Status::Lost => {
                            writeln!(out, "\n{}\n", "❌ Out of guesses.".red().bold())?;
                        }
                        Status::Active => {}
                    }
                }
                Err(err) => writeln!(out, "  {}", err.to_string().red())?,
            },
        }
    }

    writeln!(out, "\n👋 Thanks for playing!")?;
    Ok(summary)
}

fn start<G: Rng>(
    host: &mut Host<G>,
    mode: ModeKind,
    window_size: usize,
    previous: Option<SessionId>,
) -> Result<SessionId> {
    let id = match (mode, previous) {
        (ModeKind::Standard, None) => host.start_standard(),
        (ModeKind::Adversarial, None) => host.start_adversarial(window_size)?,
        (ModeKind::Standard, Some(id)) => {
            host.restart_standard(id)?;
            id
        }
        (ModeKind::Adversarial, Some(id)) => {
            host.restart_adversarial(id, window_size)?;
            id
        }
    };
    Ok(id)
}

/// Read one trimmed line; `None` at end of input
pub(super) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
