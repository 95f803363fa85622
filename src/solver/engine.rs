//! Candidate-elimination solver
//!
//! Keeps the set of words still consistent with every attempt seen so far
//! and guesses uniformly at random from it.

use super::opening::OpeningStrategy;
use crate::core::{Attempt, LetterState, Word};
use crate::wordlists::Catalog;
use log::{debug, error};
use rand::Rng;
use std::fmt;

/// Fatal solver failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// No candidate is consistent with the feedback received
    Exhausted { attempts_seen: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { attempts_seen } => write!(
                f,
                "no candidate words remain after {attempts_seen} attempts; feedback is inconsistent with the word list"
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// Whether `candidate` could still be the solution given `attempt`
///
/// - `Correct`: the candidate has that letter at that position
/// - `Present`: the candidate has the letter, but not at that position
/// - `Absent`: the candidate lacks the letter entirely, unless another
///   occurrence of the letter in the same attempt was a hit, in which case
///   this position adds no constraint
#[must_use]
pub fn is_consistent(candidate: &Word, attempt: &Attempt) -> bool {
    attempt
        .letters()
        .iter()
        .enumerate()
        .all(|(position, scored)| {
            let letter = scored.letter();
            match scored.state() {
                LetterState::Correct => candidate.letter_at(position) == letter,
                LetterState::Present => {
                    candidate.contains(letter) && candidate.letter_at(position) != letter
                }
                LetterState::Absent => attempt.hits_for(letter) > 0 || !candidate.contains(letter),
                LetterState::Unknown => true,
            }
        })
}

/// Automated player
///
/// The candidate set starts as every acceptable guess and only ever
/// shrinks: feedback removes inconsistent words and every chosen guess is
/// removed as soon as it is picked.
pub struct Solver<R: Rng> {
    candidates: Vec<Word>,
    pending_opening: Option<Word>,
    attempts_seen: usize,
    rng: R,
}

impl<R: Rng> Solver<R> {
    /// Create a solver over the catalog's acceptable guesses
    ///
    /// Candidates are kept in alphabetical order so a seeded `rng` always
    /// produces the same guesses.
    pub fn new<O: OpeningStrategy + ?Sized>(catalog: &Catalog, opening: &O, rng: R) -> Self {
        let mut candidates = catalog.sorted_allowed();
        let pending_opening = opening.opening(catalog);
        if let Some(word) = pending_opening {
            candidates.retain(|c| *c != word);
        }

        Self {
            candidates,
            pending_opening,
            attempts_seen: 0,
            rng,
        }
    }

    /// Pick the next guess and remove it from the candidate set
    ///
    /// The opening word comes first, if there is one. A single remaining
    /// candidate is returned directly; otherwise the guess is drawn
    /// uniformly at random.
    ///
    /// # Errors
    /// Returns `SolverError::Exhausted` if no candidates remain.
    pub fn next_guess(&mut self) -> Result<Word, SolverError> {
        if let Some(word) = self.pending_opening.take() {
            return Ok(word);
        }

        let index = match self.candidates.len() {
            0 => {
                error!(
                    "candidate set exhausted after {} attempts",
                    self.attempts_seen
                );
                return Err(SolverError::Exhausted {
                    attempts_seen: self.attempts_seen,
                });
            }
            1 => 0,
            n => self.rng.random_range(0..n),
        };

        Ok(self.candidates.swap_remove(index))
    }

    /// Prune the candidate set with the feedback of one attempt
    ///
    /// Returns the number of candidates left.
    pub fn observe(&mut self, attempt: &Attempt) -> usize {
        let before = self.candidates.len();
        self.candidates.retain(|c| is_consistent(c, attempt));
        self.attempts_seen += 1;

        debug!(
            "{}: {before} -> {} candidates",
            attempt.word(),
            self.candidates.len()
        );
        self.candidates.len()
    }

    /// Candidates still consistent with all feedback (unordered)
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of remaining candidates, counting a pending opening word
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len() + usize::from(self.pending_opening.is_some())
    }
}
