//! Candidate selection
//!
//! The [`Selector`] turns a [`StrategyConfig`] and a random source into
//! guesses. Every word it returns is recorded in the session's [`UsedWords`]
//! first, so no word is ever proposed twice.

use super::SolveError;
use super::strategy::{Scoring, StrategyConfig};
use crate::core::{Constraints, Feedback, Word};
use crate::wordlists::WordList;
use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::fmt;

/// Words already guessed in one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedWords(FxHashSet<Word>);

impl UsedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the word was already used
    pub fn insert(&mut self, word: Word) -> bool {
        self.0.insert(word)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.0.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Which rule produced a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Opener,
    Probe,
    /// Every constraint applied
    Filtered,
    /// Only fixed and present letters applied
    GreensAndYellows,
    /// Any unused word
    Unconstrained,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Opener => "opener",
            Self::Probe => "probe",
            Self::Filtered => "filtered",
            Self::GreensAndYellows => "greens+yellows",
            Self::Unconstrained => "unconstrained",
        })
    }
}

/// What the selector knows about the turn being played
#[derive(Debug, Clone, Copy)]
pub struct Turn<'f> {
    /// 1-based attempt number
    pub attempt: usize,
    /// Feedback for the previous guess, if any
    pub previous: Option<&'f Feedback>,
}

/// A chosen guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub stage: Stage,
    /// Size of the candidate set the word was picked from; `None` for openers and probes
    pub candidates: Option<usize>,
}

/// Candidate selector and guess strategy
pub struct Selector<R> {
    strategy: StrategyConfig,
    rng: R,
}

impl<R: Rng> Selector<R> {
    pub const fn new(strategy: StrategyConfig, rng: R) -> Self {
        Self { strategy, rng }
    }

    #[must_use]
    pub const fn strategy(&self) -> &StrategyConfig {
        &self.strategy
    }

    /// Choose the next guess and mark it used
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Stuck`] when no unused word passes the weakest
    /// filter the strategy allows at this attempt.
    pub fn choose_next_guess(
        &mut self,
        words: &WordList,
        constraints: &Constraints,
        used: &mut UsedWords,
        turn: Turn<'_>,
    ) -> Result<Guess, SolveError> {
        let guess = if let Some(opener) = self.opener(turn, used) {
            opener
        } else if let Some(probe) = self.probe(turn, used) {
            probe
        } else {
            self.filtered(words, constraints, used, turn.attempt)?
        };

        debug!(
            "attempt {}: {} guess {} ({} candidates)",
            turn.attempt,
            guess.stage,
            guess.word,
            guess
                .candidates
                .map_or_else(|| "-".to_string(), |n| n.to_string())
        );

        used.insert(guess.word.clone());
        Ok(guess)
    }

    fn opener(&mut self, turn: Turn<'_>, used: &UsedWords) -> Option<Guess> {
        if turn.attempt > 1 {
            return None;
        }
        let unused: Vec<&Word> = self
            .strategy
            .openers
            .iter()
            .filter(|w| !used.contains(w))
            .collect();
        unused.choose(&mut self.rng).map(|&word| Guess {
            word: word.clone(),
            stage: Stage::Opener,
            candidates: None,
        })
    }

    fn probe(&self, turn: Turn<'_>, used: &UsedWords) -> Option<Guess> {
        if turn.attempt != 2 {
            return None;
        }
        let hits = turn.previous.map_or(0, Feedback::hits);
        if hits >= self.strategy.probe_skip_hits {
            return None;
        }
        self.strategy
            .probe
            .as_ref()
            .filter(|probe| !used.contains(probe))
            .map(|probe| Guess {
                word: probe.clone(),
                stage: Stage::Probe,
                candidates: None,
            })
    }

    fn filtered(
        &mut self,
        words: &WordList,
        constraints: &Constraints,
        used: &UsedWords,
        attempt: usize,
    ) -> Result<Guess, SolveError> {
        let mut stage = Stage::Filtered;
        let mut candidates = filter_candidates(words, used, |w| constraints.matches(w));

        if candidates.is_empty()
            && let Some(relaxation) = self.strategy.relaxation
        {
            if attempt >= relaxation.greens_and_yellows_from {
                warn!("attempt {attempt}: no word satisfies every constraint, keeping greens and yellows only");
                stage = Stage::GreensAndYellows;
                candidates =
                    filter_candidates(words, used, |w| constraints.matches_greens_and_yellows(w));
            }
            if candidates.is_empty() && attempt >= relaxation.anything_from {
                warn!("attempt {attempt}: dropping all constraints");
                stage = Stage::Unconstrained;
                candidates = filter_candidates(words, used, |_| true);
            }
        }

        let count = candidates.len();
        let Some(word) = self.pick(&candidates, constraints) else {
            warn!("stuck on attempt {attempt} with {} words used: {constraints}", used.len());
            return Err(SolveError::Stuck {
                attempt,
                used: used.len(),
                constraints: constraints.to_string(),
            });
        };

        Ok(Guess {
            word: word.clone(),
            stage,
            candidates: Some(count),
        })
    }

    fn pick<'w>(&mut self, candidates: &[&'w Word], constraints: &Constraints) -> Option<&'w Word> {
        match &self.strategy.scoring {
            Scoring::Random => candidates.choose(&mut self.rng).copied(),
            Scoring::Heuristic(weights) => {
                let early_game = weights.is_early_game(constraints);
                // min_by_key keeps the first of equal keys
                candidates
                    .iter()
                    .copied()
                    .min_by_key(|w| Reverse(weights.score(w, constraints, early_game)))
            }
        }
    }
}

/// Unused words from `words` that satisfy `predicate`, in list order
pub fn filter_candidates<'w>(
    words: &'w WordList,
    used: &UsedWords,
    predicate: impl Fn(&Word) -> bool,
) -> Vec<&'w Word> {
    words
        .iter()
        .filter(|w| !used.contains(w) && predicate(w))
        .collect()
}
