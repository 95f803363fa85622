//! Word representation
//!
//! A `Word` is a validated, uppercase, fixed-length sequence of ASCII letters.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A five-letter word, always stored in uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalising it to uppercase
    ///
    /// Length is counted in characters, so multi-byte input reports the
    /// length a user would see.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordye::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            if !byte.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self { letters })
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - letters are validated ASCII on construction.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("letters are validated ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Count how many times a letter occurs
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
