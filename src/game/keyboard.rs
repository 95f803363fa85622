//! Keyboard hints
//!
//! Best-known state of every letter across all attempts. Display only: game
//! logic never reads it.

use crate::core::{Attempt, LetterState};

/// Alphabet in keyboard display order
pub const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    states: [LetterState; 26],
}

impl Default for Keyboard {
    fn default() -> Self {
        Self {
            states: [LetterState::Unknown; 26],
        }
    }
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild hints from scratch
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        let mut keyboard = Self::new();
        for attempt in attempts {
            keyboard.record(attempt);
        }
        keyboard
    }

    /// Merge one attempt, keeping the most informative state per letter
    pub fn record(&mut self, attempt: &Attempt) {
        for scored in attempt.letters() {
            if let Some(slot) = Self::index(scored.letter()).map(|i| &mut self.states[i]) {
                *slot = (*slot).max(scored.state());
            }
        }
    }

    /// Best-known state of `letter` (either case)
    #[must_use]
    pub fn state(&self, letter: char) -> LetterState {
        u8::try_from(letter)
            .ok()
            .and_then(|b| Self::index(b.to_ascii_uppercase()))
            .map_or(LetterState::Unknown, |i| self.states[i])
    }

    /// Letters `A..=Z` paired with their state
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        (b'A'..=b'Z')
            .zip(self.states.iter())
            .map(|(letter, &state)| (letter as char, state))
    }

    /// Letters still worth guessing, i.e. not known to be absent
    pub fn playable(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.iter().filter(|(_, state)| *state != LetterState::Absent)
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| usize::from(letter - b'A'))
    }
}
