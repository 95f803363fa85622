//! Terminal output formatting
//!
//! Display utilities for games, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    format_attempt, format_summary, print_auto_result, print_benchmark_result, print_solve_result,
};
