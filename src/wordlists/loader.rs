//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::CatalogError;
use crate::core::Word;
use log::warn;
use std::fs;
use std::path::Path;

/// Parse newline-delimited words
///
/// Blank lines are ignored and case is normalised. Lines that are not a
/// valid word are skipped with a warning naming `source` and the line.
#[must_use]
pub fn parse_words(content: &str, source: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("{source}:{}: skipping {trimmed:?}: {e}", index + 1);
                    None
                }
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordye::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_words(&content, &path.display().to_string()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordye::wordlists::loader::words_from_slice;
/// use wordye::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
