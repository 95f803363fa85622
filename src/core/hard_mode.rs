//! Hard-mode guess validation
//!
//! In hard mode a guess must honour the hints revealed by the previous
//! attempt before it is scored.

use super::feedback::{Attempt, LetterState};
use super::word::Word;
use std::fmt;

/// Which hard-mode rules are enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HardMode {
    /// Any word in the list may be guessed
    #[default]
    Off,
    /// Correct letters must stay in place
    Standard,
    /// Correct letters must stay in place and present letters must be reused
    Strict,
}

impl HardMode {
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }
}

/// Why a guess was refused under hard mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardModeViolation {
    /// A letter revealed as correct was not repeated at its position
    MissingCorrect { position: usize, letter: char },
    /// A letter revealed as present was not reused often enough
    MissingPresent { letter: char, required: usize },
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCorrect { position, letter } => {
                write!(f, "letter {} must be {letter}", position + 1)
            }
            Self::MissingPresent { letter, required: 1 } => {
                write!(f, "guess must contain {letter}")
            }
            Self::MissingPresent { letter, required } => {
                write!(f, "guess must contain {letter} at least {required} times")
            }
        }
    }
}

impl std::error::Error for HardModeViolation {}

/// Check `guess` against the hints of the previous attempt
///
/// Always accepts when hard mode is off or there is no previous attempt.
/// Positions are checked left to right, so the first violated position is
/// the one reported.
///
/// # Errors
/// Returns the first `HardModeViolation` found.
///
/// # Examples
/// ```
/// use wordye::core::{Attempt, HardMode, Word, hard_mode};
///
/// let solution = Word::new("abide").unwrap();
/// let previous = Attempt::score(&Word::new("adieu").unwrap(), &solution);
///
/// let ok = Word::new("aside").unwrap();
/// let bad = Word::new("crane").unwrap();
/// assert!(hard_mode::validate(&ok, Some(&previous), HardMode::Standard).is_ok());
/// assert!(hard_mode::validate(&bad, Some(&previous), HardMode::Standard).is_err());
/// ```
pub fn validate(
    guess: &Word,
    previous: Option<&Attempt>,
    mode: HardMode,
) -> Result<(), HardModeViolation> {
    let Some(previous) = previous else {
        return Ok(());
    };
    if !mode.is_enabled() {
        return Ok(());
    }

    for (position, scored) in previous.letters().iter().enumerate() {
        if scored.state() == LetterState::Correct && guess.letter_at(position) != scored.letter()
        {
            return Err(HardModeViolation::MissingCorrect {
                position,
                letter: scored.as_char(),
            });
        }
    }

    if mode == HardMode::Strict {
        for scored in previous.letters() {
            if scored.state() != LetterState::Present {
                continue;
            }
            let required = previous.hits_for(scored.letter());
            if guess.count_of(scored.letter()) < required {
                return Err(HardModeViolation::MissingPresent {
                    letter: scored.as_char(),
                    required,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn no_previous_attempt_accepts_anything() {
        assert!(validate(&word("zebra"), None, HardMode::Strict).is_ok());
    }

    #[test]
    fn off_accepts_anything() {
        let previous = Attempt::from_markers("abide", "G----");
        assert!(validate(&word("zebra"), Some(&previous), HardMode::Off).is_ok());
    }

    #[test]
    fn correct_letter_must_be_repeated() {
        let previous = Attempt::from_markers("adieu", "G----");
        assert_eq!(
            validate(&word("crane"), Some(&previous), HardMode::Standard),
            Err(HardModeViolation::MissingCorrect {
                position: 0,
                letter: 'A',
            })
        );
        assert!(validate(&word("alarm"), Some(&previous), HardMode::Standard).is_ok());
    }

    #[test]
    fn first_violated_position_is_reported() {
        let previous = Attempt::from_markers("crane", "-G-GG");
        assert_eq!(
            validate(&word("slate"), Some(&previous), HardMode::Standard),
            Err(HardModeViolation::MissingCorrect {
                position: 1,
                letter: 'R',
            })
        );
    }

    #[test]
    fn standard_ignores_present_letters() {
        let previous = Attempt::from_markers("crane", "-Y---");
        assert!(validate(&word("bliss"), Some(&previous), HardMode::Standard).is_ok());
    }

    #[test]
    fn strict_requires_present_letters() {
        let previous = Attempt::from_markers("crane", "-Y---");
        assert_eq!(
            validate(&word("bliss"), Some(&previous), HardMode::Strict),
            Err(HardModeViolation::MissingPresent {
                letter: 'R',
                required: 1,
            })
        );
        assert!(validate(&word("rider"), Some(&previous), HardMode::Strict).is_ok());
    }

    #[test]
    fn strict_counts_revealed_duplicates() {
        // One E correct, one E present: the next guess needs two E's
        let previous = Attempt::from_markers("eerie", "-Y--G");
        assert_eq!(
            validate(&word("stage"), Some(&previous), HardMode::Strict),
            Err(HardModeViolation::MissingPresent {
                letter: 'E',
                required: 2,
            })
        );
        assert!(validate(&word("geese"), Some(&previous), HardMode::Strict).is_ok());
    }

    #[test]
    fn violation_messages() {
        let missing = HardModeViolation::MissingCorrect {
            position: 0,
            letter: 'A',
        };
        assert_eq!(missing.to_string(), "letter 1 must be A");

        let present = HardModeViolation::MissingPresent {
            letter: 'R',
            required: 1,
        };
        assert_eq!(present.to_string(), "guess must contain R");
    }
}
