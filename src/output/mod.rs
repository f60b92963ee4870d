//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
mod pacing;

pub use display::{
    print_evaluation, print_guess, print_solve_error, print_solve_header, print_solve_result,
};
pub use pacing::Pacer;
