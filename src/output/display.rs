//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{BenchmarkResult, ScoreResult, SplitResult, guess_range};
use crate::session::ModeKind;
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {}", colored_guess(&result.guess, result.pattern));
    println!("  {}", result.pattern.to_emoji());
    println!("  {}", result.pattern.labels().bright_black());
    println!(
        "  {} hits, {} present",
        result.pattern.count_hits().to_string().green(),
        result.pattern.count_presents().to_string().yellow()
    );
}

/// Print the partition table for one guess
pub fn print_split_result(result: &SplitResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Splitting {} candidates on {}",
        result.pool_size,
        result.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, group) in result.groups.iter().enumerate() {
        let words = group
            .words
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect::<Vec<_>>()
            .join(" ");
        let line = format!("{} {:>3}  {words}", group.pattern.to_emoji(), group.len());
        if i == result.kept {
            println!("{} {}", "▶".green().bold(), line.green());
        } else {
            println!("  {line}");
        }
    }

    let kept = &result.groups[result.kept];
    println!(
        "\nHost keeps {} ({} of {} candidates)",
        kept.pattern.labels().bright_cyan(),
        kept.len(),
        result.pool_size
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    let mode = match result.mode {
        ModeKind::Standard => "standard",
        ModeKind::Adversarial => "adversarial",
    };

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({mode} mode)",
        "BENCHMARK RESULTS".bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    let win_rate = if result.total_games > 0 {
        result.wins as f64 / result.total_games as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "   Wins:             {} {}",
        result.wins,
        format!("({win_rate:.1}%)").green()
    );
    println!("   Losses:           {}", format!("{}", result.losses).red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    if let Some(remaining) = result.average_final_remaining {
        println!("   Final pool size:  {remaining:.2} candidates on average");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.wins == 0 {
        return;
    }

    println!("\n📈 {}", "Winning guess distribution:".bright_cyan().bold());
    for guesses in guess_range() {
        let count = result.distribution.get(&guesses).copied().unwrap_or(0);
        let pct = count as f64 / result.wins as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
