//! Core domain types for the puzzle
//!
//! Words, guess scoring and hard-mode rules. Everything here is pure and
//! free of I/O.

mod feedback;
pub mod hard_mode;
mod word;

pub use feedback::{Attempt, LetterState, ScoredLetter};
pub use hard_mode::{HardMode, HardModeViolation};
pub use word::{WORD_LENGTH, Word, WordError};
