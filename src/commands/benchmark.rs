//! Benchmark command
//!
//! Lets the solver play many independent games and aggregates the results.

use super::solve::{SolveResult, solve_random};
use crate::game::GameConfig;
use crate::solver::OpeningStrategy;
use crate::wordlists::Catalog;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Average guesses over won games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Won games by number of guesses
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    /// Share of games won, as a percentage
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64 * 100.0
        }
    }

    fn from_games(games: &[SolveResult], duration: Duration) -> Self {
        let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
        let mut total_guesses = 0;
        let mut min_guesses = usize::MAX;
        let mut max_guesses = 0;

        for game in games.iter().filter(|g| g.success) {
            let guesses = game.guesses.len();
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        }

        let total_games = games.len();
        let wins = distribution.values().sum();
        let secs = duration.as_secs_f64();

        Self {
            total_games,
            wins,
            losses: total_games - wins,
            average_guesses: if wins == 0 {
                0.0
            } else {
                total_guesses as f64 / wins as f64
            },
            min_guesses: if wins == 0 { 0 } else { min_guesses },
            max_guesses,
            distribution,
            duration,
            games_per_second: if secs > 0.0 {
                total_games as f64 / secs
            } else {
                0.0
            },
        }
    }
}

/// Play `count` games in parallel
///
/// Game `i` draws its solution and guesses from an RNG seeded with
/// `seed + i`, so a run is reproducible regardless of thread scheduling.
///
/// # Errors
///
/// Returns an error if the solver runs out of candidates in any game.
pub fn run_benchmark<O>(
    catalog: &Catalog,
    config: GameConfig,
    opening: &O,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult>
where
    O: OpeningStrategy + Sync + ?Sized,
{
    let pb = if show_progress {
        progress_bar(count)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let games = (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let rng = StdRng::seed_from_u64(seed.wrapping_add(i));
            let result = solve_random(catalog, config, opening, rng);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_and_clear();

    let result = BenchmarkResult::from_games(&games, start.elapsed());
    info!(
        "benchmark: {} games, {} won, {:.2} average guesses",
        result.total_games, result.wins, result.average_guesses
    );
    Ok(result)
}

fn progress_bar(count: usize) -> ProgressBar {
    let pb = ProgressBar::new(count as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {elapsed}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
