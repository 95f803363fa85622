//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{SessionEnd, run_simple};
pub use solve::{GuessStep, SolveResult, solve_game, solve_random, solve_word};
