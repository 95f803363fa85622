//! Word lists for the puzzle
//!
//! A [`Catalog`] pairs the solution pool with the set of acceptable guesses.
//! Defaults are embedded into the binary at build time.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Word;
use loader::{load_from_file, words_from_slice};
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which list a catalog error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Solutions,
    Guesses,
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solutions => f.write_str("solution"),
            Self::Guesses => f.write_str("guess"),
        }
    }
}

/// Error type for loading word lists
#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    EmptyPool(Pool),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read word list {}: {source}", path.display())
            }
            Self::EmptyPool(pool) => write!(f, "the {pool} list contains no valid words"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::EmptyPool(_) => None,
        }
    }
}

/// Solution pool plus the acceptable-guess set
///
/// The acceptable set is the union of both lists, so every solution can
/// always be guessed.
#[derive(Debug, Clone)]
pub struct Catalog {
    solutions: Vec<Word>,
    allowed: FxHashSet<Word>,
}

impl Catalog {
    /// Build a catalog from a solution pool and extra guesses
    ///
    /// # Errors
    /// Returns `CatalogError::EmptyPool` if either list is empty.
    pub fn new(solutions: Vec<Word>, guesses: Vec<Word>) -> Result<Self, CatalogError> {
        if solutions.is_empty() {
            return Err(CatalogError::EmptyPool(Pool::Solutions));
        }
        if guesses.is_empty() {
            return Err(CatalogError::EmptyPool(Pool::Guesses));
        }

        let mut allowed: FxHashSet<Word> = guesses.into_iter().collect();
        allowed.extend(solutions.iter().copied());

        Ok(Self { solutions, allowed })
    }

    /// Catalog built from the lists embedded at compile time
    ///
    /// # Errors
    /// Returns `CatalogError::EmptyPool` if an embedded list was built empty.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::new(words_from_slice(SOLUTIONS), words_from_slice(GUESSES))
    }

    /// Load the catalog, replacing either embedded list with a file
    ///
    /// # Errors
    /// Returns `CatalogError` if a file cannot be read or a list is empty.
    pub fn load(
        solutions_path: Option<&Path>,
        guesses_path: Option<&Path>,
    ) -> Result<Self, CatalogError> {
        let solutions = match solutions_path {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(SOLUTIONS),
        };
        let guesses = match guesses_path {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(GUESSES),
        };
        Self::new(solutions, guesses)
    }

    /// Words that may be chosen as the hidden solution
    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Every acceptable guess (solutions included)
    #[inline]
    #[must_use]
    pub const fn allowed(&self) -> &FxHashSet<Word> {
        &self.allowed
    }

    /// Whether `word` may be guessed
    #[inline]
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    /// The acceptable guesses in alphabetical order
    #[must_use]
    pub fn sorted_allowed(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.allowed.iter().copied().collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn guesses_count_matches_const() {
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn embedded_lists_are_valid_words() {
        for &word in SOLUTIONS.iter().chain(GUESSES) {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid word");
        }
    }

    #[test]
    fn embedded_catalog_allows_every_solution() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.solutions().is_empty());
        for solution in catalog.solutions() {
            assert!(catalog.is_allowed(solution));
        }
        assert!(catalog.allowed().len() >= catalog.solutions().len());
    }

    #[test]
    fn embedded_catalog_contains_opening_word() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.is_allowed(&Word::new("adieu").unwrap()));
    }

    #[test]
    fn allowed_is_union_of_both_lists() {
        let catalog = Catalog::new(
            words_from_slice(&["abide", "erase"]),
            words_from_slice(&["speed", "erase"]),
        )
        .unwrap();

        assert_eq!(catalog.allowed().len(), 3);
        assert_eq!(
            catalog.sorted_allowed(),
            words_from_slice(&["abide", "erase", "speed"])
        );
    }

    #[test]
    fn empty_pools_are_rejected() {
        let words = words_from_slice(&["abide"]);
        assert!(matches!(
            Catalog::new(Vec::new(), words.clone()),
            Err(CatalogError::EmptyPool(Pool::Solutions))
        ));
        assert!(matches!(
            Catalog::new(words, Vec::new()),
            Err(CatalogError::EmptyPool(Pool::Guesses))
        ));
    }

    #[test]
    fn empty_pool_message() {
        let err = CatalogError::EmptyPool(Pool::Guesses);
        assert_eq!(err.to_string(), "the guess list contains no valid words");
    }
}
