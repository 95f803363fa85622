//! Opening guess strategies
//!
//! The solver's first guess is picked before any feedback exists, so an
//! opening strategy may only look at the catalog, never at a game.

use crate::core::{Word, WordError};
use crate::wordlists::Catalog;
use log::warn;

/// Opening guess used when none is requested
pub const DEFAULT_OPENING: &str = "ADIEU";

/// A strategy for choosing the first guess of a game
pub trait OpeningStrategy {
    /// The opening word, or `None` to start with a random candidate
    fn opening(&self, catalog: &Catalog) -> Option<Word>;
}

/// Enum wrapper for all opening strategies
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opening {
    /// Always open with the same word
    Fixed(FixedOpening),
    /// Open with the word covering the most common letters
    Frequency(FrequencyOpening),
    /// No opening; the first guess is random like every other
    Random(NoOpening),
}

impl Default for Opening {
    fn default() -> Self {
        Self::Fixed(FixedOpening::default())
    }
}

impl OpeningStrategy for Opening {
    fn opening(&self, catalog: &Catalog) -> Option<Word> {
        match self {
            Self::Fixed(s) => s.opening(catalog),
            Self::Frequency(s) => s.opening(catalog),
            Self::Random(s) => s.opening(catalog),
        }
    }
}

impl Opening {
    /// Create strategy from name string
    ///
    /// Supported names: "default", "frequency", "random"/"none". Any other
    /// name is taken as a fixed opening word.
    ///
    /// # Errors
    /// Returns `WordError` if the name is not a strategy and not a word.
    pub fn from_name(name: &str) -> Result<Self, WordError> {
        match name.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::default()),
            "frequency" | "freq" => Ok(Self::Frequency(FrequencyOpening)),
            "random" | "none" => Ok(Self::Random(NoOpening)),
            word => Ok(Self::Fixed(FixedOpening(Word::new(word)?))),
        }
    }
}

/// Always open with the same word, if the catalog allows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOpening(pub Word);

impl Default for FixedOpening {
    fn default() -> Self {
        Self(Word::new(DEFAULT_OPENING).expect("default opening is a valid word"))
    }
}

impl OpeningStrategy for FixedOpening {
    fn opening(&self, catalog: &Catalog) -> Option<Word> {
        if catalog.is_allowed(&self.0) {
            Some(self.0)
        } else {
            warn!("opening word {} is not in the word list, ignoring it", self.0);
            None
        }
    }
}

/// Open with the acceptable word whose distinct letters are most common
/// across the solution pool
///
/// Ties go to the alphabetically first word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyOpening;

impl FrequencyOpening {
    /// Number of solutions containing each letter
    fn letter_frequencies(solutions: &[Word]) -> [usize; 26] {
        let mut freq = [0; 26];
        for word in solutions {
            for letter in b'A'..=b'Z' {
                if word.contains(letter) {
                    freq[usize::from(letter - b'A')] += 1;
                }
            }
        }
        freq
    }

    fn score(word: &Word, freq: &[usize; 26]) -> usize {
        (b'A'..=b'Z')
            .filter(|&letter| word.contains(letter))
            .map(|letter| freq[usize::from(letter - b'A')])
            .sum()
    }
}

impl OpeningStrategy for FrequencyOpening {
    fn opening(&self, catalog: &Catalog) -> Option<Word> {
        let freq = Self::letter_frequencies(catalog.solutions());
        let mut best: Option<(Word, usize)> = None;

        for word in catalog.sorted_allowed() {
            let score = Self::score(&word, &freq);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }

        best.map(|(word, _)| word)
    }
}

/// No opening word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoOpening;

impl OpeningStrategy for NoOpening {
    fn opening(&self, _catalog: &Catalog) -> Option<Word> {
        None
    }
}
