//! Solver-driven games
//!
//! Lets the candidate-elimination solver play a game to the end and
//! records every step.

use crate::core::{Attempt, Word};
use crate::game::{Game, GameConfig};
use crate::solver::{OpeningStrategy, Solver, SolverError};
use crate::wordlists::Catalog;
use anyhow::{Context, Result, bail};
use log::warn;
use rand::Rng;

/// Result of a solver-driven game
pub struct SolveResult {
    pub solution: Word,
    pub success: bool,
    pub hard_mode: bool,
    pub max_attempts: usize,
    pub guesses: Vec<GuessStep>,
}

/// A single accepted guess
pub struct GuessStep {
    pub attempt: Attempt,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Let `solver` play `game` until it is won or lost
///
/// Guesses the game refuses under hard mode are skipped; the solver has
/// already dropped them from its candidate set, so it simply draws again.
///
/// # Errors
///
/// Returns `SolverError::Exhausted` if the solver runs out of candidates.
pub fn solve_game<R: Rng>(
    game: &mut Game<'_>,
    solver: &mut Solver<R>,
) -> Result<SolveResult, SolverError> {
    let mut guesses = Vec::new();

    while !game.is_over() {
        let candidates_before = solver.remaining();
        let guess = solver.next_guess()?;

        match game.submit(guess.text()) {
            Ok(Some(attempt)) => {
                let candidates_after = solver.observe(&attempt);
                guesses.push(GuessStep {
                    attempt,
                    candidates_before,
                    candidates_after,
                });
            }
            Ok(None) => break,
            // Candidates come from the catalog, so only hard mode can refuse them
            Err(e) => warn!("solver guess {guess} rejected: {e}"),
        }
    }

    let config = game.config();
    Ok(SolveResult {
        solution: game.solution(),
        success: game.is_won(),
        hard_mode: config.hard_mode.is_enabled(),
        max_attempts: config.max_attempts,
        guesses,
    })
}

/// Let the solver play a game with a random solution
///
/// # Errors
///
/// Returns an error if the solver runs out of candidates.
pub fn solve_random<O, R>(
    catalog: &Catalog,
    config: GameConfig,
    opening: &O,
    mut rng: R,
) -> Result<SolveResult>
where
    O: OpeningStrategy + ?Sized,
    R: Rng,
{
    let mut game = Game::new(catalog, config, &mut rng);
    let mut solver = Solver::new(catalog, opening, rng);
    Ok(solve_game(&mut game, &mut solver)?)
}

/// Let the solver play a game against a chosen solution
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid five-letter word
/// - The target is not in the word list
/// - The solver runs out of candidates
pub fn solve_word<O, R>(
    catalog: &Catalog,
    config: GameConfig,
    opening: &O,
    target: &str,
    rng: R,
) -> Result<SolveResult>
where
    O: OpeningStrategy + ?Sized,
    R: Rng,
{
    let solution = Word::new(target).with_context(|| format!("invalid target word {target:?}"))?;
    if !catalog.is_allowed(&solution) {
        bail!("target word {solution} is not in the word list");
    }

    let mut game = Game::with_solution(catalog, solution, config);
    let mut solver = Solver::new(catalog, opening, rng);
    Ok(solve_game(&mut game, &mut solver)?)
}
