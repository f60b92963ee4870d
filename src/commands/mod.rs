//! Command implementations

pub mod evaluate;
pub mod solve;
pub mod test_all;

pub use evaluate::evaluate_guess;
pub use solve::{solve_word, solve_word_with_pacer};
pub use test_all::{
    SolveFailure, TestAllOptions, TestAllStatistics, print_test_all_statistics, run_test_all,
    select_secrets,
};
