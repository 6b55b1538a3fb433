//! Wordle Host - CLI
//!
//! Play against a standard or an adversarial host, play a two-player hotseat
//! game, inspect feedback and partitions, or benchmark an automated player.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::sync::Arc;
use wordle_host::{
    commands::{
        BenchmarkConfig, pool_from_list, run_benchmark, run_hotseat, run_play, score_words,
        split_pool,
    },
    config::{GameConfig, WordlistSource},
    core::Dictionary,
    engine::{CandidatePool, DEFAULT_WINDOW_SIZE},
    output::{print_benchmark_result, print_score_result, print_split_result},
    player::Pick,
    session::{Host, ModeKind},
};

#[derive(Parser)]
#[command(
    name = "wordle_host",
    about = "Five-letter word game with a standard and an adversarial host",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible secrets and candidate windows
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Opening candidate window for adversarial games
    #[arg(long, global = true, default_value_t = DEFAULT_WINDOW_SIZE)]
    window: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal (default)
    Play {
        /// Play against the adversarial host
        #[arg(long, conflicts_with = "hotseat")]
        hard: bool,

        /// Two players take turns guessing the same word
        #[arg(long)]
        hotseat: bool,
    },

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Show how the adversarial host partitions a pool for a guess
    Split {
        /// The guessed word
        guess: String,

        /// Comma-separated pool; defaults to a random window
        #[arg(long)]
        words: Option<String>,
    },

    /// Play many automated games and report statistics
    Benchmark {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Benchmark the adversarial host
        #[arg(long)]
        hard: bool,

        /// Let the player pick random consistent words instead of the first one
        #[arg(long)]
        random: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GameConfig {
        wordlist: WordlistSource::from_arg(&cli.wordlist),
        window_size: cli.window,
        seed: cli.seed,
    };
    config.validate()?;

    let dictionary = Arc::new(config.wordlist.load()?);
    log::info!("Dictionary ready with {} words", dictionary.len());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        hard: false,
        hotseat: false,
    });

    match command {
        Commands::Play { hotseat: true, .. } => run_hotseat_command(&config, dictionary),
        Commands::Play { hard, .. } => run_play_command(&config, dictionary, hard),
        Commands::Score { guess, target } => {
            print_score_result(&score_words(&guess, &target)?);
            Ok(())
        }
        Commands::Split { guess, words } => {
            run_split_command(&config, &dictionary, &guess, words.as_deref())
        }
        Commands::Benchmark {
            count,
            hard,
            random,
        } => run_benchmark_command(&config, &dictionary, count, hard, random),
    }
}

const fn mode_for(hard: bool) -> ModeKind {
    if hard {
        ModeKind::Adversarial
    } else {
        ModeKind::Standard
    }
}

fn run_play_command(config: &GameConfig, dictionary: Arc<Dictionary>, hard: bool) -> Result<()> {
    let mut host = Host::new(dictionary, config.rng());
    let stdin = io::stdin();
    let summary = run_play(
        &mut host,
        mode_for(hard),
        config.window_size,
        stdin.lock(),
        io::stdout(),
    )?;
    log::info!("Played {} games, won {}", summary.games, summary.wins);
    Ok(())
}

fn run_hotseat_command(config: &GameConfig, dictionary: Arc<Dictionary>) -> Result<()> {
    let mut host = Host::new(dictionary, config.rng());
    let stdin = io::stdin();
    let summary = run_hotseat(&mut host, stdin.lock(), io::stdout())?;
    log::info!(
        "Played {} hotseat games: {} to player 1, {} to player 2, {} drawn",
        summary.games,
        summary.player_one,
        summary.player_two,
        summary.draws
    );
    Ok(())
}

fn run_split_command(
    config: &GameConfig,
    dictionary: &Dictionary,
    guess: &str,
    words: Option<&str>,
) -> Result<()> {
    let pool = match words {
        Some(list) => pool_from_list(dictionary, list)?,
        None => CandidatePool::draw(dictionary, config.window_size, &mut config.rng())?,
    };
    let result = split_pool(dictionary, &pool, guess)?;
    print_split_result(&result);
    Ok(())
}

fn run_benchmark_command(
    config: &GameConfig,
    dictionary: &Arc<Dictionary>,
    count: usize,
    hard: bool,
    random: bool,
) -> Result<()> {
    let mode = mode_for(hard);
    println!("Running {count} automated games against the {mode:?} host...");

    let benchmark = BenchmarkConfig {
        games: count,
        mode,
        window_size: config.window_size,
        seed: config.seed.unwrap_or_else(rand::random),
        pick: if random { Pick::Random } else { Pick::First },
    };
    let result = run_benchmark(dictionary, &benchmark)?;
    print_benchmark_result(&result);
    Ok(())
}
