//! Hotseat play mode
//!
//! Two players share one terminal and take turns against the same secret.

use super::play::prompt;
use crate::output::formatters::colored_guess;
use crate::session::{Host, HotseatStatus, MAX_ROUNDS, Seat, SessionId};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Results of one hotseat run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HotseatSummary {
    pub games: usize,
    pub player_one: usize,
    pub player_two: usize,
    pub draws: usize,
}

/// Run alternating two-player games until the players quit or input ends
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_hotseat<G: Rng, R: BufRead, W: Write>(
    host: &mut Host<G>,
    mut input: R,
    mut out: W,
) -> Result<HotseatSummary> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Wordle Host - Hotseat                      ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Two players, one word, {MAX_ROUNDS} guesses each. First to solve it wins."
    )?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    let mut summary = HotseatSummary::default();
    let id = host.start_hotseat();
    summary.games += 1;

    loop {
        let Some(game) = host.hotseat(id) else {
            anyhow::bail!("Session {id} disappeared");
        };
        let finished = game.status().is_terminal();
        let label = if finished {
            "Play again? (yes/no)".to_string()
        } else {
            let seat = game.turn();
            format!("{seat} guess {}/{MAX_ROUNDS}", game.history(seat).len() + 1)
        };

        let Some(line) = prompt(&mut input, &mut out, &label)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "no" if finished => break,
            "new" | "n" => restart(host, id, &mut summary, &mut out)?,
            "yes" | "y" if finished => restart(host, id, &mut summary, &mut out)?,
            _ => match host.submit_hotseat_guess(id, &line) {
                Ok(outcome) => {
                    let Some(record) = host
                        .hotseat(id)
                        .and_then(|g| g.history(outcome.seat).last())
                    else {
                        anyhow::bail!("Guess was not recorded");
                    };
                    writeln!(
                        out,
                        "  {}  {}",
                        colored_guess(&record.guess, outcome.pattern),
                        outcome.seat.to_string().bright_black()
                    )?;

                    let answer = outcome
                        .answer
                        .map(|w| w.text().to_uppercase())
                        .unwrap_or_default();
                    match outcome.status {
                        HotseatStatus::Won(seat) => {
                            match seat {
                                Seat::One => summary.player_one += 1,
                                Seat::Two => summary.player_two += 1,
                            }
                            writeln!(
                                out,
                                "\n{} The word was {}.\n",
                                format!("🎉 {seat} wins!").bright_green().bold(),
                                answer.bright_white().bold()
                            )?;
                        }
                        HotseatStatus::Draw => {
                            summary.draws += 1;
                            writeln!(
                                out,
                                "\n{} The word was {}.\n",
                                "🤝 It's a draw!".yellow().bold(),
                                answer.bright_white().bold()
                            )?;
                        }
                        HotseatStatus::Active => {}
                    }
                }
                Err(err) => writeln!(out, "  {}", err.to_string().red())?,
            },
        }
    }

    writeln!(out, "\n👋 Thanks for playing!")?;
    Ok(summary)
}

fn restart<G: Rng, W: Write>(
    host: &mut Host<G>,
    id: SessionId,
    summary: &mut HotseatSummary,
    out: &mut W,
) -> Result<()> {
    host.restart_hotseat(id)?;
    summary.games += 1;
    writeln!(out, "\n🔄 New game started!\n")?;
    Ok(())
}
