//! Core domain types for Wordle
//!
//! Words, the feedback oracle and the constraint store. Nothing here performs
//! I/O or holds randomness; every type is owned by whoever creates it.

mod constraints;
mod feedback;
mod word;

pub use constraints::Constraints;
pub use feedback::{Feedback, Verdict};
pub use word::{Word, WordError};

/// Letters in every word the solver handles
pub const WORD_LENGTH: usize = 5;
