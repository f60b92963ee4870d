//! Wordle Autoplayer
//!
//! A Wordle solver that plays against itself: it knows the secret, scores its
//! own guesses and narrows an ordered word list with the accumulated letter
//! constraints until it finds the word.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_autoplayer::core::Word;
//! use wordle_autoplayer::solver::{Session, SolveConfig, StrategyConfig};
//! use wordle_autoplayer::wordlists::WordList;
//!
//! let words = WordList::embedded();
//! let secret = Word::new("crane").unwrap();
//! let session = Session::new(
//!     &words,
//!     secret,
//!     StrategyConfig::enhanced(),
//!     StdRng::seed_from_u64(7),
//!     SolveConfig::default(),
//! )
//! .unwrap();
//!
//! let outcome = session.run(|guess| println!("{} {}", guess.word, guess.feedback)).unwrap();
//! println!("Solved in {} guesses", outcome.stats.guesses);
//! ```

// Core domain types
pub mod core;

// Guess selection and the game loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
