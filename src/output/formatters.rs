//! Formatting utilities for terminal output

use crate::core::{Attempt, LetterState, ScoredLetter};
use crate::game::Keyboard;
use colored::{ColoredString, Colorize};

/// Summary marker for a correct letter
pub const CORRECT_MARKER: char = '🟩';
/// Summary marker for a letter present elsewhere
pub const PRESENT_MARKER: char = '🟨';
/// Summary marker for an absent letter
pub const ABSENT_MARKER: char = '⬛';

/// Marker used in end-of-game summaries
#[must_use]
pub const fn marker(state: LetterState) -> char {
    match state {
        LetterState::Correct => CORRECT_MARKER,
        LetterState::Present => PRESENT_MARKER,
        LetterState::Absent | LetterState::Unknown => ABSENT_MARKER,
    }
}

/// Format an attempt as a row of emoji markers
#[must_use]
pub fn attempt_to_emoji(attempt: &Attempt) -> String {
    attempt.states().map(marker).collect()
}

/// Colour `text` the way a tile in `state` is shown
#[must_use]
pub fn paint(text: &str, state: LetterState) -> ColoredString {
    match state {
        LetterState::Correct => text.black().on_bright_green(),
        LetterState::Present => text.black().on_bright_yellow(),
        LetterState::Absent => text.bright_white().on_black(),
        LetterState::Unknown => text.normal(),
    }
}

/// A single guessed letter as a padded, coloured tile
#[must_use]
pub fn letter_tile(letter: ScoredLetter) -> ColoredString {
    paint(&format!(" {} ", letter.as_char()), letter.state())
}

/// Letters not yet ruled out, coloured by best-known state
#[must_use]
pub fn keyboard_hints(keyboard: &Keyboard) -> String {
    keyboard
        .playable()
        .map(|(letter, state)| paint(&letter.to_string(), state).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
