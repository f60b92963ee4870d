//! Self-playing Wordle solver
//!
//! A [`Session`] plays one secret to completion. Guess choice lives in
//! [`Selector`], configured by a [`StrategyConfig`].

mod error;
mod selector;
mod session;
pub mod strategy;

pub use error::SolveError;
pub use selector::{Guess, Selector, Stage, Turn, UsedWords, filter_candidates};
pub use session::{GUESS_BUDGET, GuessRecord, Session, SolveConfig, SolveOutcome, SolveStats};
pub use strategy::{HeuristicWeights, Relaxation, Scoring, StrategyConfig};
