//! One self-played game
//!
//! A [`Session`] owns the constraint store and used-word set for a single
//! secret. Sessions never share state; batch runs create a fresh one per
//! secret.

use super::selector::{Guess, Selector, Stage, Turn, UsedWords, filter_candidates};
use super::{SolveError, StrategyConfig};
use crate::core::{Constraints, Feedback, Word};
use crate::wordlists::WordList;
use log::info;
use rand::Rng;
use std::time::{Duration, Instant};

/// Guesses allowed before a solve counts as over budget
pub const GUESS_BUDGET: usize = 6;

/// Per-session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    pub budget: usize,
    /// Insert cosmetic delays between guesses; never changes which guesses are made
    pub enable_pacing: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            budget: GUESS_BUDGET,
            enable_pacing: false,
        }
    }
}

impl SolveConfig {
    #[must_use]
    pub const fn with_pacing(mut self, enable_pacing: bool) -> Self {
        self.enable_pacing = enable_pacing;
        self
    }
}

/// A single guess and what it revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub attempt: usize,
    pub word: Word,
    pub feedback: Feedback,
    pub stage: Stage,
    pub candidates: Option<usize>,
}

/// Final figures for a solved session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    pub guesses: usize,
    /// Time spent choosing and evaluating guesses
    pub elapsed: Duration,
    pub exceeded_budget: bool,
}

/// A finished session
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub secret: Word,
    pub guesses: Vec<GuessRecord>,
    pub stats: SolveStats,
}

/// Game loop for one secret
pub struct Session<'w, R> {
    words: &'w WordList,
    secret: Word,
    selector: Selector<R>,
    config: SolveConfig,
    constraints: Constraints,
    used: UsedWords,
    history: Vec<GuessRecord>,
    elapsed: Duration,
}

impl<'w, R: Rng> Session<'w, R> {
    /// Start a session with empty constraints
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptyWordList`] if `words` is empty.
    pub fn new(
        words: &'w WordList,
        secret: Word,
        strategy: StrategyConfig,
        rng: R,
        config: SolveConfig,
    ) -> Result<Self, SolveError> {
        if words.is_empty() {
            return Err(SolveError::EmptyWordList);
        }

        Ok(Self {
            words,
            secret,
            selector: Selector::new(strategy, rng),
            config,
            constraints: Constraints::new(),
            used: UsedWords::new(),
            history: Vec::new(),
            elapsed: Duration::ZERO,
        })
    }

    /// Play one guess
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Stuck`] if no guess can be produced, or
    /// [`SolveError::Finished`] if the secret was already found.
    pub fn step(&mut self) -> Result<&GuessRecord, SolveError> {
        if self.is_solved() {
            return Err(SolveError::Finished);
        }

        let started = Instant::now();
        let turn = Turn {
            attempt: self.attempt(),
            previous: self.history.last().map(|record| &record.feedback),
        };
        let chosen = self.selector.choose_next_guess(
            self.words,
            &self.constraints,
            &mut self.used,
            turn,
        );
        let Guess {
            word,
            stage,
            candidates,
        } = match chosen {
            Ok(guess) => guess,
            Err(e) => {
                self.elapsed += started.elapsed();
                return Err(e);
            }
        };

        let feedback = Feedback::evaluate(&word, &self.secret);
        self.constraints.apply_feedback(&word, &feedback);
        self.elapsed += started.elapsed();

        let record = GuessRecord {
            attempt: turn.attempt,
            word,
            feedback,
            stage,
            candidates,
        };
        self.history.push(record);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Play until the secret is found
    ///
    /// `observer` sees every guess as it is made.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Stuck`] if the selector runs out of words.
    pub fn run(mut self, mut observer: impl FnMut(&GuessRecord)) -> Result<SolveOutcome, SolveError> {
        while !self.is_solved() {
            observer(self.step()?);
        }
        Ok(self.finish())
    }

    /// Close the session and compute its stats
    #[must_use]
    pub fn finish(self) -> SolveOutcome {
        let guesses = self.history.len();
        let stats = SolveStats {
            guesses,
            elapsed: self.elapsed,
            exceeded_budget: guesses > self.config.budget,
        };
        info!(
            "{} solved={} in {} guesses ({:?})",
            self.secret,
            self.is_solved(),
            guesses,
            stats.elapsed
        );
        SolveOutcome {
            secret: self.secret,
            guesses: self.history,
            stats,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|r| r.feedback.is_solved())
    }

    /// Number of the next guess, starting at 1
    #[must_use]
    pub fn attempt(&self) -> usize {
        self.history.len() + 1
    }

    /// Unused words still consistent with every constraint
    #[must_use]
    pub fn candidates(&self) -> Vec<&'w Word> {
        filter_candidates(self.words, &self.used, |w| self.constraints.matches(w))
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn used(&self) -> &UsedWords {
        &self.used
    }

    #[must_use]
    pub const fn strategy(&self) -> &StrategyConfig {
        self.selector.strategy()
    }
}
