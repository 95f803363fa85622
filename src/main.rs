//! Wordye - CLI
//!
//! Play the word guessing game in a TUI or a plain prompt, or watch the
//! solver play it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::path::PathBuf;
use wordye::{
    commands::{run_benchmark, run_simple, solve_random, solve_word},
    core::HardMode,
    game::{Game, GameConfig, MAX_ATTEMPTS},
    output::{format_summary, print_auto_result, print_benchmark_result, print_solve_result},
    solver::Opening,
    wordlists::Catalog,
};

#[derive(Parser)]
#[command(
    name = "wordye",
    about = "Play a game of Wordye, or let the solver play it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Every guess must use all hints revealed by the previous one
    #[arg(short = '!', long, global = true)]
    hard_mode: bool,

    /// Hard mode that also requires repeated letters as often as revealed
    #[arg(long, global = true)]
    strict: bool,

    /// Number of guesses per game
    #[arg(long, global = true, default_value_t = MAX_ATTEMPTS, value_parser = parse_attempts)]
    max_attempts: usize,

    /// Seed for solution and solver choices (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Solution word list file (one word per line)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Extra acceptable guesses file (one word per line)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Solver opening: default (ADIEU), frequency, random, or any word
    #[arg(short, long, global = true, default_value = "default")]
    opening: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Watch the solver play a random game (always in hard mode)
    Auto,

    /// Let the solver play against a chosen word
    Solve {
        /// The hidden word
        word: String,

        /// Show candidate counts for each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Let the solver play many seeded games
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn parse_attempts(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    const fn hard_mode(&self) -> HardMode {
        if self.strict {
            HardMode::Strict
        } else if self.hard_mode {
            HardMode::Standard
        } else {
            HardMode::Off
        }
    }

    const fn game_config(&self) -> GameConfig {
        GameConfig::new(self.hard_mode(), self.max_attempts)
    }
}

/// The auto player always follows at least standard hard-mode rules
const fn auto_config(config: GameConfig) -> GameConfig {
    match config.hard_mode {
        HardMode::Off => GameConfig::new(HardMode::Standard, config.max_attempts),
        _ => config,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let catalog = Catalog::load(cli.solutions.as_deref(), cli.guesses.as_deref())
        .context("failed to load word lists")?;
    info!(
        "{} solutions, {} acceptable guesses",
        catalog.solutions().len(),
        catalog.allowed().len()
    );

    let opening = Opening::from_name(&cli.opening)
        .with_context(|| format!("invalid opening {:?}", cli.opening))?;
    let config = cli.game_config();
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&catalog, config, rng),
        Commands::Simple => run_simple_command(&catalog, config, &mut rng),
        Commands::Auto => {
            let result = solve_random(&catalog, auto_config(config), &opening, rng)?;
            print_auto_result(&result);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let result = solve_word(&catalog, config, &opening, &word, rng)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let seed = cli.seed.unwrap_or_else(|| rng.random());
            println!("Running benchmark on {count} games (seed {seed})...");
            let result = run_benchmark(&catalog, config, &opening, count, seed, true)?;
            print_benchmark_result(&result, config.max_attempts);
            Ok(())
        }
    }
}

fn run_simple_command(catalog: &Catalog, config: GameConfig, rng: &mut StdRng) -> Result<()> {
    let mut game = Game::new(catalog, config, rng);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let end = run_simple(&mut game, stdin.lock(), &mut stdout)?;
    info!("session ended: {end:?}");
    Ok(())
}

fn run_play_command(catalog: &Catalog, config: GameConfig, rng: StdRng) -> Result<()> {
    use wordye::interactive::{App, run_tui};

    let app = run_tui(App::new(catalog, config, rng))?;

    if app.game.is_over() {
        println!("{}", format_summary(&app.game));
    } else {
        println!(
            "You lost! The correct answer was: {}",
            app.game.solution()
        );
    }

    let stats = &app.stats;
    if stats.total_games > 1 {
        println!(
            "\nPlayed {} games, won {} ({:.0}%)",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        );
    }
    Ok(())
}
