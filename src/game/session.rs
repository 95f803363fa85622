//! Game session state machine
//!
//! A [`Game`] owns the hidden solution and the append-only list of attempts.
//! Every guess goes through [`Game::submit`], which validates it, scores it
//! and records it, or rejects it without touching any state.

use super::keyboard::Keyboard;
use crate::core::{Attempt, HardMode, HardModeViolation, WORD_LENGTH, Word, WordError, hard_mode};
use crate::wordlists::Catalog;
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Default number of guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Rules fixed when a game is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub hard_mode: HardMode,
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hard_mode: HardMode::Off,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(hard_mode: HardMode, max_attempts: usize) -> Self {
        Self {
            hard_mode,
            max_attempts,
        }
    }
}

/// Why a guess was refused
///
/// All variants are recoverable: the game is unchanged and the player may
/// simply try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Guess is not exactly five characters long
    Length { actual: usize },
    /// Guess has the right length but is not made of letters
    InvalidCharacters,
    /// Guess is not in the acceptable-guess list
    NotInWordList(String),
    /// Guess ignores hints revealed by the previous attempt
    HardMode(HardModeViolation),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { .. } => write!(f, "Must be {WORD_LENGTH} letters long."),
            Self::InvalidCharacters => write!(f, "Must contain only letters A-Z."),
            Self::NotInWordList(word) => {
                write!(f, "Could not find \"{word}\" in the dictionary.")
            }
            Self::HardMode(violation) => write!(
                f,
                "Must use all revealed hints from previous guesses (hard mode): {violation}."
            ),
        }
    }
}

impl std::error::Error for GuessError {}

/// A single game in progress or finished
#[derive(Debug, Clone)]
pub struct Game<'a> {
    catalog: &'a Catalog,
    solution: Word,
    config: GameConfig,
    attempts: Vec<Attempt>,
    keyboard: Keyboard,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a game with a solution drawn uniformly from the solution pool
    ///
    /// # Panics
    /// Will not panic - a `Catalog` always has a non-empty solution pool.
    pub fn new<R: Rng + ?Sized>(catalog: &'a Catalog, config: GameConfig, rng: &mut R) -> Self {
        let solution = *catalog
            .solutions()
            .choose(rng)
            .expect("catalog solution pool is never empty");
        Self::with_solution(catalog, solution, config)
    }

    /// Start a game with a known solution
    #[must_use]
    pub fn with_solution(catalog: &'a Catalog, solution: Word, config: GameConfig) -> Self {
        debug!("new game: hard mode {:?}, {} attempts", config.hard_mode, config.max_attempts);
        Self {
            catalog,
            solution,
            config,
            attempts: Vec::with_capacity(config.max_attempts),
            keyboard: Keyboard::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Validate, score and record a guess
    ///
    /// Returns `Ok(None)` without doing anything once the game is over.
    ///
    /// # Errors
    /// Returns a `GuessError` describing the first failed check, in this
    /// order: length, characters, word list, hard mode. Rejected guesses
    /// leave the game unchanged.
    pub fn submit(&mut self, raw_guess: &str) -> Result<Option<Attempt>, GuessError> {
        if self.status.is_terminal() {
            return Ok(None);
        }

        let guess = Word::new(raw_guess.trim()).map_err(|e| match e {
            WordError::InvalidLength(actual) => GuessError::Length { actual },
            WordError::NonAscii | WordError::InvalidCharacters => GuessError::InvalidCharacters,
        })?;

        if !self.catalog.is_allowed(&guess) {
            return Err(GuessError::NotInWordList(guess.text().to_string()));
        }

        hard_mode::validate(&guess, self.attempts.last(), self.config.hard_mode)
            .map_err(GuessError::HardMode)?;

        let attempt = Attempt::score(&guess, &self.solution);
        self.attempts.push(attempt);
        self.keyboard.record(&attempt);

        if attempt.is_win() {
            self.status = GameStatus::Won;
            info!("solved {} in {} attempts", self.solution, self.attempts.len());
        } else if self.attempts.len() >= self.config.max_attempts {
            self.status = GameStatus::Lost;
            info!("out of attempts, solution was {}", self.solution);
        }

        Ok(Some(attempt))
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// The hidden solution
    #[inline]
    #[must_use]
    pub const fn solution(&self) -> Word {
        self.solution
    }

    /// Attempts so far, oldest first
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Guesses left before the game is lost
    #[inline]
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> Catalog {
        Catalog::new(
            words_from_slice(&["abide", "erase", "crane", "slate", "alarm", "aside"]),
            words_from_slice(&["speed", "adieu", "zebra", "qwert"]),
        )
        .unwrap()
    }

    fn game<'a>(catalog: &'a Catalog, solution: &str, hard_mode: HardMode) -> Game<'a> {
        Game::with_solution(
            catalog,
            Word::new(solution).unwrap(),
            GameConfig::new(hard_mode, MAX_ATTEMPTS),
        )
    }

    #[test]
    fn correct_guess_wins() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Off);

        let attempt = game.submit("ABIDE").unwrap().unwrap();

        assert!(attempt.states().all(|s| s == LetterState::Correct));
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_won());
        assert_eq!(game.attempts().len(), 1);
    }

    #[test]
    fn no_attempts_after_win() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Off);
        game.submit("abide").unwrap();

        assert_eq!(game.submit("crane"), Ok(None));
        assert_eq!(game.attempts().len(), 1);
    }

    #[test]
    fn six_misses_lose() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Off);

        for guess in ["crane", "slate", "erase", "speed", "zebra"] {
            game.submit(guess).unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
        }
        game.submit("alarm").unwrap();

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_attempts(), 0);
        assert_eq!(game.submit("abide"), Ok(None));
        assert_eq!(game.attempts().len(), MAX_ATTEMPTS);
        assert_eq!(game.solution().text(), "ABIDE");
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let catalog = catalog();
        let mut game = Game::with_solution(
            &catalog,
            Word::new("abide").unwrap(),
            GameConfig::new(HardMode::Off, 2),
        );
        game.submit("crane").unwrap();
        game.submit("abide").unwrap();

        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Off);

        assert_eq!(game.submit("abid"), Err(GuessError::Length { actual: 4 }));
        assert_eq!(game.submit("abides"), Err(GuessError::Length { actual: 6 }));
        assert_eq!(game.submit(""), Err(GuessError::Length { actual: 0 }));
        assert!(game.attempts().is_empty());
    }

    #[test]
    fn non_letters_are_rejected() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Off);

        assert_eq!(game.submit("ab1de"), Err(GuessError::InvalidCharacters));
        assert!(game.attempts().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Off);

        assert_eq!(
            game.submit("xxxxx"),
            Err(GuessError::NotInWordList("XXXXX".to_string()))
        );
        assert!(game.attempts().is_empty());
        assert_eq!(game.keyboard(), &Keyboard::new());
    }

    #[test]
    fn guesses_are_case_insensitive_and_trimmed() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Off);

        let attempt = game.submit("  CrAnE \n").unwrap().unwrap();
        assert_eq!(attempt.word().text(), "CRANE");
    }

    #[test]
    fn hard_mode_rejects_missing_correct_letter() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Standard);

        // A is correct at position 0
        game.submit("alarm").unwrap();
        let before = game.keyboard().clone();

        let err = game.submit("crane").unwrap_err();
        assert_eq!(
            err,
            GuessError::HardMode(HardModeViolation::MissingCorrect {
                position: 0,
                letter: 'A',
            })
        );
        assert_eq!(game.attempts().len(), 1);
        assert_eq!(game.keyboard(), &before);

        assert!(game.submit("aside").is_ok());
    }

    #[test]
    fn hard_mode_off_allows_anything() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Off);
        game.submit("alarm").unwrap();

        assert!(game.submit("crane").is_ok());
    }

    #[test]
    fn hard_mode_keeps_correct_letters_in_place() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Standard);

        for guess in ["adieu", "crane", "aside", "slate", "abide"] {
            let _ = game.submit(guess);
        }

        // Every accepted attempt repeats each letter that was correct before it
        for pair in game.attempts().windows(2) {
            for (prev, next) in pair[0].letters().iter().zip(pair[1].letters()) {
                if prev.state() == LetterState::Correct {
                    assert_eq!(prev.letter(), next.letter());
                    assert_eq!(next.state(), LetterState::Correct);
                }
            }
        }
        assert!(game.is_won());
    }

    #[test]
    fn length_checked_before_dictionary() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Standard);
        game.submit("alarm").unwrap();

        // Too long and not a word: length wins
        assert_eq!(game.submit("zzzzzz"), Err(GuessError::Length { actual: 6 }));
        // Not a word and breaks hard mode: dictionary wins
        assert_eq!(
            game.submit("zzzzz"),
            Err(GuessError::NotInWordList("ZZZZZ".to_string()))
        );
    }

    #[test]
    fn keyboard_tracks_attempts() {
        let catalog = catalog();
        let mut game = game(&catalog, "abide", HardMode::Off);
        game.submit("crane").unwrap();

        assert_eq!(game.keyboard().state('C'), LetterState::Absent);
        assert_eq!(game.keyboard().state('A'), LetterState::Present);
        assert_eq!(game.keyboard().state('E'), LetterState::Correct);
        assert_eq!(game.keyboard(), &Keyboard::from_attempts(game.attempts()));
    }

    #[test]
    fn seeded_games_pick_the_same_solution() {
        let catalog = catalog();
        let a = Game::new(&catalog, GameConfig::default(), &mut StdRng::seed_from_u64(7));
        let b = Game::new(&catalog, GameConfig::default(), &mut StdRng::seed_from_u64(7));

        assert_eq!(a.solution(), b.solution());
        assert!(catalog.solutions().contains(&a.solution()));
    }

    #[test]
    fn error_messages_are_distinct() {
        let messages = [
            GuessError::Length { actual: 4 }.to_string(),
            GuessError::InvalidCharacters.to_string(),
            GuessError::NotInWordList("XXXXX".to_string()).to_string(),
            GuessError::HardMode(HardModeViolation::MissingCorrect {
                position: 0,
                letter: 'A',
            })
            .to_string(),
        ];
        assert_eq!(messages[0], "Must be 5 letters long.");
        assert_eq!(messages[2], "Could not find \"XXXXX\" in the dictionary.");
        assert!(messages[3].contains("hard mode"));
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
