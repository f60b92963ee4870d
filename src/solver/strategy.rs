//! Guess selection strategies
//!
//! A [`StrategyConfig`] describes how a [`Selector`](super::Selector) picks
//! guesses: which openers it starts from, whether it spends the second guess on
//! a fixed probe word, how it ranks surviving candidates and when it relaxes
//! the constraints. The two presets reproduce the classic random player and
//! the enhanced heuristic player.

use crate::core::{Constraints, Word};
use crate::wordlists::loader::words_from_slice;

/// Openers with broad coverage of common letters
pub const DEFAULT_OPENERS: &[&str] = &[
    "slate", "crane", "soare", "raise", "arise", "audio", "adieu", "react",
];

/// Second guess used when the opener reveals little
pub const DEFAULT_PROBE: &str = "doing";

/// How surviving candidates are ranked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scoring {
    /// Uniform random choice among candidates
    Random,
    /// Highest heuristic score, ties going to the earliest word in the list
    Heuristic(HeuristicWeights),
}

/// Weights for [`Scoring::Heuristic`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicWeights {
    /// Awarded per position that is not fixed and holds a known-present letter
    pub relocation_bonus: u32,
    /// Letters favoured while little is known
    pub common_letters: &'static [u8],
    /// Awarded per occurrence of a common letter during the early game
    pub common_letter_bonus: u32,
    /// Early game lasts while fewer distinct letters than this are known
    pub early_game_known_letters: usize,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            relocation_bonus: 50,
            common_letters: b"etaoinshrdlu",
            common_letter_bonus: 1,
            early_game_known_letters: 3,
        }
    }
}

impl HeuristicWeights {
    /// Score `word` against the current constraints
    ///
    /// `early_game` is computed once per selection by the caller, see
    /// [`HeuristicWeights::is_early_game`].
    #[must_use]
    pub fn score(&self, word: &Word, constraints: &Constraints, early_game: bool) -> u32 {
        let relocated = word
            .chars()
            .iter()
            .zip(constraints.fixed())
            .filter(|(letter, fixed)| fixed.is_none() && constraints.present().contains(*letter))
            .count() as u32;

        let mut score = relocated * self.relocation_bonus;
        if early_game {
            let common = word
                .chars()
                .iter()
                .filter(|letter| self.common_letters.contains(letter))
                .count() as u32;
            score += common * self.common_letter_bonus;
        }
        score
    }

    #[must_use]
    pub fn is_early_game(&self, constraints: &Constraints) -> bool {
        constraints.known_letter_count() < self.early_game_known_letters
    }
}

/// Attempt thresholds for the relaxation stages
///
/// Both thresholds count guesses from 1 and only apply once full filtering
/// has come up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relaxation {
    /// Keep only fixed and present letters from this attempt on
    pub greens_and_yellows_from: usize,
    /// Accept any unused word from this attempt on
    pub anything_from: usize,
}

impl Default for Relaxation {
    fn default() -> Self {
        Self {
            greens_and_yellows_from: 8,
            anything_from: 10,
        }
    }
}

/// Complete description of a guessing strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyConfig {
    pub name: &'static str,
    /// First guess is drawn uniformly from these
    pub openers: Vec<Word>,
    /// Fixed second guess, `None` to always filter from the second guess on
    pub probe: Option<Word>,
    /// Skip the probe when the opener already scored this many Correct-or-Present letters
    pub probe_skip_hits: usize,
    pub scoring: Scoring,
    /// `None` means an empty candidate set is immediately fatal
    pub relaxation: Option<Relaxation>,
}

impl StrategyConfig {
    /// Random opener, then a uniformly random consistent word each turn
    #[must_use]
    pub fn classic() -> Self {
        Self {
            name: "classic",
            openers: words_from_slice(DEFAULT_OPENERS),
            probe: None,
            probe_skip_hits: 3,
            scoring: Scoring::Random,
            relaxation: None,
        }
    }

    /// Random opener, probe second guess, heuristic ranking and relaxation
    #[must_use]
    pub fn enhanced() -> Self {
        Self {
            name: "enhanced",
            openers: words_from_slice(DEFAULT_OPENERS),
            probe: Word::new(DEFAULT_PROBE).ok(),
            probe_skip_hits: 3,
            scoring: Scoring::Heuristic(HeuristicWeights::default()),
            relaxation: Some(Relaxation::default()),
        }
    }

    /// Create strategy from name string
    ///
    /// Supported names: "classic", "enhanced". Defaults to enhanced if the name
    /// is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "classic" | "random" => Self::classic(),
            _ => Self::enhanced(),
        }
    }

    /// Always open with `opener`
    #[must_use]
    pub fn with_opener(mut self, opener: Word) -> Self {
        self.openers = vec![opener];
        self
    }

    #[must_use]
    pub fn with_probe(mut self, probe: Option<Word>) -> Self {
        self.probe = probe;
        self
    }

    #[must_use]
    pub const fn with_relaxation(mut self, relaxation: Option<Relaxation>) -> Self {
        self.relaxation = relaxation;
        self
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::enhanced()
    }
}
