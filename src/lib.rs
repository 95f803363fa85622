//! Wordye
//!
//! A five-letter word guessing game with an optional hard mode and a
//! candidate-elimination solver that can play it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordye::core::{Attempt, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let solution = Word::new("erase").unwrap();
//!
//! // Score a guess against the hidden word
//! let attempt = Attempt::score(&guess, &solution);
//! println!("{:?}", attempt.states().collect::<Vec<_>>());
//! ```

// Core domain types
pub mod core;

// Game rules and state
pub mod game;

// Automated player
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
