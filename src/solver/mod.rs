//! Automated player
//!
//! A candidate-elimination solver plus the strategies that choose its
//! opening guess.

mod engine;
pub mod opening;

pub use engine::{Solver, SolverError, is_consistent};
pub use opening::{FixedOpening, FrequencyOpening, NoOpening, Opening, OpeningStrategy};
