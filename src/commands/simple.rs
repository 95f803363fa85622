//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI. Reads guesses from any `BufRead`
//! so it can be driven by tests.

use crate::core::WORD_LENGTH;
use crate::game::{Game, GuessError};
use crate::output::display::{format_attempt, format_summary};
use crate::output::formatters::keyboard_hints;
use std::io::{self, BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    /// The player quit or input ended before the game was decided
    Interrupted,
}

/// Play `game` interactively until it is decided or the player gives up
///
/// Invalid guesses are reported and re-prompted. End of input (Ctrl-D) or
/// `quit` ends the session early and reveals the solution.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    mut input: R,
    out: &mut W,
) -> io::Result<SessionEnd> {
    writeln!(out, "\n{}", "  _  ".repeat(WORD_LENGTH))?;

    while !game.is_over() {
        let Some(guess) = prompt_guess(game, &mut input, out)? else {
            writeln!(
                out,
                "\nYou lost! The correct answer was: {}",
                game.solution()
            )?;
            return Ok(SessionEnd::Interrupted);
        };

        match game.submit(&guess) {
            Ok(Some(attempt)) => writeln!(out, "\n{}", format_attempt(&attempt))?,
            Ok(None) => break,
            Err(e) => writeln!(out, "{}", rejection_message(&e, &guess))?,
        }
    }

    let end = if game.is_won() {
        let attempts = game.attempts().len();
        let tries = if attempts == 1 { "try" } else { "tries" };
        writeln!(out, "Congrats! You solved it in {attempts} {tries}!")?;
        SessionEnd::Won
    } else {
        writeln!(out, "Better luck next time!")?;
        writeln!(out, "The correct solution was: {}", game.solution())?;
        SessionEnd::Lost
    };

    writeln!(out, "\n{}", format_summary(game))?;
    Ok(end)
}

/// Message shown for a refused guess
#[must_use]
pub fn rejection_message(error: &GuessError, raw_guess: &str) -> String {
    match error {
        // Echo what was typed, not the normalised word
        GuessError::NotInWordList(_) => format!(
            "Invalid guess! Could not find \"{}\" in the dictionary.",
            raw_guess.trim()
        ),
        other => format!("Invalid guess! {other}"),
    }
}

/// Prompt for one guess; `None` means the player wants out
fn prompt_guess<R: BufRead, W: Write>(
    game: &Game<'_>,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    write!(
        out,
        "[{}/{}] Enter guess ({}): ",
        game.attempts().len() + 1,
        game.config().max_attempts,
        keyboard_hints(game.keyboard())
    )?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let guess = line.trim();
    if matches!(guess.to_ascii_lowercase().as_str(), "quit" | "exit") {
        return Ok(None);
    }
    Ok(Some(guess.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HardMode, Word};
    use crate::game::{GameConfig, MAX_ATTEMPTS};
    use crate::wordlists::Catalog;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn catalog() -> Catalog {
        Catalog::new(
            words_from_slice(&["abide", "erase", "crane", "slate", "alarm", "aside"]),
            words_from_slice(&["speed", "adieu", "zebra"]),
        )
        .unwrap()
    }

    fn play(catalog: &Catalog, hard_mode: HardMode, input: &str) -> (SessionEnd, String, usize) {
        let mut game = Game::with_solution(
            catalog,
            Word::new("abide").unwrap(),
            GameConfig::new(hard_mode, MAX_ATTEMPTS),
        );
        let mut out = Vec::new();
        let end = run_simple(&mut game, Cursor::new(input), &mut out).unwrap();
        (end, String::from_utf8(out).unwrap(), game.attempts().len())
    }

    #[test]
    fn immediate_win() {
        let (end, out, attempts) = play(&catalog(), HardMode::Off, "abide\n");

        assert_eq!(end, SessionEnd::Won);
        assert_eq!(attempts, 1);
        assert!(out.contains("You solved it in 1 try!"));
        assert!(out.contains("Wordye ABIDE 1/6"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (end, out, attempts) =
            play(&catalog(), HardMode::Off, "abc\nxxxxx\nab1de\ncrane\nabide\n");

        assert_eq!(end, SessionEnd::Won);
        assert_eq!(attempts, 2);
        assert!(out.contains("Must be 5 letters long."));
        assert!(out.contains("Could not find \"xxxxx\" in the dictionary."));
        assert!(out.contains("Must contain only letters"));
        assert!(out.contains("You solved it in 2 tries!"));
    }

    #[test]
    fn hard_mode_violation_reprompts() {
        let (end, out, attempts) = play(&catalog(), HardMode::Standard, "alarm\ncrane\naside\n");

        assert_eq!(end, SessionEnd::Interrupted);
        assert_eq!(attempts, 2);
        assert!(out.contains("hard mode"));
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let input = "crane\nslate\nerase\nspeed\nzebra\nalarm\n";
        let (end, out, attempts) = play(&catalog(), HardMode::Off, input);

        assert_eq!(end, SessionEnd::Lost);
        assert_eq!(attempts, 6);
        assert!(out.contains("The correct solution was: ABIDE"));
        assert!(out.contains("Wordye ABIDE X/6"));
    }

    #[test]
    fn end_of_input_reveals_solution() {
        let (end, out, attempts) = play(&catalog(), HardMode::Off, "crane\n");

        assert_eq!(end, SessionEnd::Interrupted);
        assert_eq!(attempts, 1);
        assert!(out.contains("You lost! The correct answer was: ABIDE"));
    }

    #[test]
    fn quit_command_reveals_solution() {
        let (end, out, _) = play(&catalog(), HardMode::Off, "QUIT\nabide\n");

        assert_eq!(end, SessionEnd::Interrupted);
        assert!(out.contains("The correct answer was: ABIDE"));
    }

    #[test]
    fn prompt_counts_attempts() {
        let (_, out, _) = play(&catalog(), HardMode::Off, "crane\n");

        assert!(out.contains("[1/6] Enter guess ("));
        assert!(out.contains("[2/6] Enter guess ("));
    }
}
