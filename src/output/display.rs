//! Display functions for games and command results

use super::formatters::{attempt_to_emoji, create_progress_bar, letter_tile};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Attempt, Word};
use crate::game::Game;
use colored::Colorize;

/// An attempt as a row of coloured letter tiles
#[must_use]
pub fn format_attempt(attempt: &Attempt) -> String {
    attempt
        .letters()
        .iter()
        .map(|&letter| format!(" {} ", letter_tile(letter)))
        .collect()
}

/// Shareable end-of-game summary
///
/// The heading reads `Wordye <SOLUTION> <n>/<max>`, with `X` instead of `n`
/// for a lost game and a trailing `*` in hard mode, followed by one emoji
/// row per attempt.
#[must_use]
pub fn summary(
    solution: Word,
    attempts: &[Attempt],
    won: bool,
    hard_mode: bool,
    max_attempts: usize,
) -> String {
    let score = if won {
        attempts.len().to_string()
    } else {
        "X".to_string()
    };
    let star = if hard_mode { "*" } else { "" };

    let mut lines = vec![format!("Wordye {solution} {score}/{max_attempts}{star}")];
    lines.extend(attempts.iter().map(attempt_to_emoji));
    lines.join("\n")
}

/// Summary of a finished game
#[must_use]
pub fn format_summary(game: &Game<'_>) -> String {
    let config = game.config();
    summary(
        game.solution(),
        game.attempts(),
        game.is_won(),
        config.hard_mode.is_enabled(),
        config.max_attempts,
    )
}

/// Print a solver-played game turn by turn
pub fn print_auto_result(result: &SolveResult) {
    for (i, step) in result.guesses.iter().enumerate() {
        if i > 0 {
            if step.candidates_before > 1 {
                println!("Considering {} total candidates...", step.candidates_before);
            } else {
                println!("Solved it!");
            }
        }
        println!(
            "[{}/{}] Guessing: {}",
            i + 1,
            result.max_attempts,
            step.attempt.word()
        );
        println!("\n{}", format_attempt(&step.attempt));
    }

    println!();
    if result.success {
        let n = result.guesses.len();
        let tries = if n == 1 { "try" } else { "tries" };
        println!("Congrats! You solved it in {n} {tries}!");
    } else {
        println!("Better luck next time!");
        println!("The correct solution was: {}", result.solution);
    }
    println!("\n{}", solve_summary(result));
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Solving: {}{}",
        result.solution.to_string().bright_yellow().bold(),
        if result.hard_mode { " (hard mode)" } else { "" }
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            format_attempt(&step.attempt),
            attempt_to_emoji(&step.attempt)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
    println!("\n{}", solve_summary(result));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Won:              {} ({:.1}%)",
        result.wins.to_string().green(),
        result.win_rate()
    );
    println!("   Lost:             {}", result.losses.to_string().red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", result.min_guesses.to_string().green());
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let total = result.total_games as f64;
    for guesses in 1..=max_attempts {
        if let Some(&count) = result.distribution.get(&guesses) {
            print_distribution_row(&guesses.to_string(), count, total);
        }
    }
    if result.losses > 0 {
        print_distribution_row("X", result.losses, total);
    }
}

fn print_distribution_row(label: &str, count: usize, total: f64) {
    let pct = count as f64 / total * 100.0;
    let bar = create_progress_bar(pct, 100.0, 40);
    println!("   {label:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
}

fn solve_summary(result: &SolveResult) -> String {
    let attempts: Vec<Attempt> = result.guesses.iter().map(|s| s.attempt).collect();
    summary(
        result.solution,
        &attempts,
        result.success,
        result.hard_mode,
        result.max_attempts,
    )
}
