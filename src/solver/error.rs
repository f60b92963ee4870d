//! Solver error type

use crate::core::WordError;
use std::fmt;

/// Failures surfaced by a solving session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No unused word survives even the weakest filter available at this attempt
    Stuck {
        attempt: usize,
        used: usize,
        constraints: String,
    },
    /// The word list has no valid five-letter words
    EmptyWordList,
    /// A secret, opener or probe failed normalisation
    InvalidWord(WordError),
    /// `step` was called on a session that has already found the secret
    Finished,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stuck {
                attempt,
                used,
                constraints,
            } => write!(
                f,
                "solver got stuck on attempt {attempt} after {used} words ({constraints})"
            ),
            Self::EmptyWordList => write!(f, "word list contains no five-letter words"),
            Self::InvalidWord(e) => write!(f, "invalid word: {e}"),
            Self::Finished => write!(f, "session already solved"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for SolveError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}
