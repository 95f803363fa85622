//! Game sessions
//!
//! The state machine that turns raw guesses into scored attempts, plus the
//! derived keyboard hints shown to players.

pub mod keyboard;
mod session;

pub use keyboard::Keyboard;
pub use session::{Game, GameConfig, GameStatus, GuessError, MAX_ATTEMPTS};
