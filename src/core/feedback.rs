//! Guess scoring
//!
//! An `Attempt` is a guess together with the per-letter feedback it earned
//! against the hidden solution.

use super::word::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
///
/// Variants are declared in increasing order of informativeness, so the
/// derived ordering is `Unknown < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterState {
    /// Nothing is known about the letter yet
    #[default]
    Unknown,
    /// Letter is not in the solution
    Absent,
    /// Letter is in the solution, but at another position
    Present,
    /// Letter is in the solution at this position
    Correct,
}

impl LetterState {
    /// Letter is known to be somewhere in the solution
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Present | Self::Correct)
    }
}

/// A guessed letter and its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredLetter {
    letter: u8,
    state: LetterState,
}

impl ScoredLetter {
    const fn new(letter: u8, state: LetterState) -> Self {
        Self { letter, state }
    }

    /// The uppercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    /// The letter as a `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.letter as char
    }

    #[inline]
    #[must_use]
    pub const fn state(self) -> LetterState {
        self.state
    }
}

/// One completed guess with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt {
    letters: [ScoredLetter; WORD_LENGTH],
}

impl Attempt {
    /// Score `guess` against `solution`
    ///
    /// Handles repeated letters: a letter is never reported as `Correct` or
    /// `Present` more often than it occurs in the solution, and when a
    /// guess repeats a letter more often than the solution has it, earlier
    /// positions claim the remaining `Present` slots.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove them from the
    ///    pool of available solution letters
    /// 2. Second pass, left to right: mark `Present` while the pool still
    ///    holds that letter, otherwise `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordye::core::{Attempt, LetterState, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let solution = Word::new("erase").unwrap();
    /// let attempt = Attempt::score(&guess, &solution);
    ///
    /// let states: Vec<LetterState> = attempt.states().collect();
    /// assert_eq!(
    ///     states,
    ///     [
    ///         LetterState::Present,
    ///         LetterState::Absent,
    ///         LetterState::Present,
    ///         LetterState::Present,
    ///         LetterState::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, solution: &Word) -> Self {
        let mut states = [LetterState::Absent; WORD_LENGTH];
        let mut available = solution.letter_counts();

        // Allow: Index needed to compare guess[i] with solution[i] and set states[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.letter_at(i);
            if letter == solution.letter_at(i) {
                states[i] = LetterState::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if states[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                states[i] = LetterState::Present;
                *count -= 1;
            }
        }

        let mut letters = [ScoredLetter::new(0, LetterState::Unknown); WORD_LENGTH];
        for (i, slot) in letters.iter_mut().enumerate() {
            *slot = ScoredLetter::new(guess.letter_at(i), states[i]);
        }

        Self { letters }
    }

    /// Build an attempt from a marker string like "GY-GY"
    ///
    /// Test-only: real attempts come from [`Attempt::score`].
    #[cfg(test)]
    pub(crate) fn from_markers(word: &str, markers: &str) -> Self {
        let word = Word::new(word).unwrap();
        let states: Vec<LetterState> = markers
            .chars()
            .map(|c| match c {
                'G' => LetterState::Correct,
                'Y' => LetterState::Present,
                '-' => LetterState::Absent,
                other => panic!("unknown marker {other}"),
            })
            .collect();
        assert_eq!(states.len(), WORD_LENGTH);

        let mut letters = [ScoredLetter::new(0, LetterState::Unknown); WORD_LENGTH];
        for (i, slot) in letters.iter_mut().enumerate() {
            *slot = ScoredLetter::new(word.letter_at(i), states[i]);
        }
        Self { letters }
    }

    /// The scored letters in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[ScoredLetter; WORD_LENGTH] {
        &self.letters
    }

    /// Iterate over the classifications in guess order
    pub fn states(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.letters.iter().map(|l| l.state)
    }

    /// The guessed word
    ///
    /// # Panics
    /// Will not panic - every attempt is built from a validated word.
    #[must_use]
    pub fn word(&self) -> Word {
        let text: String = self.letters.iter().map(|l| l.as_char()).collect();
        Word::new(&text).expect("attempt letters come from a valid word")
    }

    /// Every letter is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.states().all(|s| s == LetterState::Correct)
    }

    /// Number of positions whose letter is `letter` and whose state is a hit
    #[must_use]
    pub fn hits_for(&self, letter: u8) -> usize {
        self.letters
            .iter()
            .filter(|l| l.letter == letter && l.state.is_hit())
            .count()
    }
}
