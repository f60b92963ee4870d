//! Accumulated letter knowledge
//!
//! [`Constraints`] records what a sequence of feedback has revealed about the
//! secret: letters fixed at a position, letters present somewhere, letters
//! absent everywhere, and letters ruled out at specific positions.

use super::{Feedback, Verdict, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use std::fmt;

/// Knowledge about the secret gathered from feedback
///
/// Owned by a single solving session and updated after every guess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    fixed: [Option<u8>; WORD_LENGTH],
    present: FxHashSet<u8>,
    absent: FxHashSet<u8>,
    exclusions: [FxHashSet<u8>; WORD_LENGTH],
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the feedback for `guess` into the accumulated knowledge
    ///
    /// An Absent verdict only blacklists the letter when no other copy of it
    /// in the same guess was Correct or Present. Otherwise the secret holds
    /// the letter fewer times than the guess does, and the Absent copy only
    /// rules out its own position.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, &letter) in guess.chars().iter().enumerate() {
            match feedback.at(i) {
                Verdict::Correct => {
                    self.fixed[i] = Some(letter);
                    self.present.remove(&letter);
                }
                Verdict::Present => {
                    self.present.insert(letter);
                    self.exclusions[i].insert(letter);
                }
                Verdict::Absent => {
                    if is_accounted_for(letter, guess, feedback) {
                        self.exclusions[i].insert(letter);
                    } else {
                        self.absent.insert(letter);
                    }
                }
            }
        }
    }

    /// Whether `word` is consistent with everything known so far
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.matches_greens_and_yellows(word)
            && !self.absent.iter().any(|&letter| word.has_letter(letter))
            && self
                .exclusions
                .iter()
                .zip(word.chars())
                .all(|(excluded, letter)| !excluded.contains(letter))
    }

    /// Weaker check using only fixed and present letters
    #[must_use]
    pub fn matches_greens_and_yellows(&self, word: &Word) -> bool {
        self.fixed
            .iter()
            .zip(word.chars())
            .all(|(fixed, letter)| fixed.is_none_or(|f| f == *letter))
            && self.present.iter().all(|&letter| word.has_letter(letter))
    }

    #[inline]
    #[must_use]
    pub const fn fixed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.fixed
    }

    #[inline]
    #[must_use]
    pub const fn present(&self) -> &FxHashSet<u8> {
        &self.present
    }

    #[inline]
    #[must_use]
    pub const fn absent(&self) -> &FxHashSet<u8> {
        &self.absent
    }

    #[inline]
    #[must_use]
    pub const fn exclusions(&self) -> &[FxHashSet<u8>; WORD_LENGTH] {
        &self.exclusions
    }

    /// Distinct letters known to be in the secret, placed or not
    #[must_use]
    pub fn known_letter_count(&self) -> usize {
        let mut known = self.present.clone();
        known.extend(self.fixed.iter().flatten());
        known.len()
    }

    /// Fixed letters as a pattern such as `"__a_e"`
    #[must_use]
    pub fn fixed_pattern(&self) -> String {
        self.fixed
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect()
    }

    /// Sorted letters of a set, for display
    #[must_use]
    pub fn letters(set: &FxHashSet<u8>) -> String {
        let mut letters: Vec<u8> = set.iter().copied().collect();
        letters.sort_unstable();
        letters.into_iter().map(char::from).collect()
    }
}

fn is_accounted_for(letter: u8, guess: &Word, feedback: &Feedback) -> bool {
    guess
        .chars()
        .iter()
        .zip(feedback.verdicts())
        .any(|(&ch, verdict)| ch == letter && verdict.is_hit())
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fixed {} | present [{}] | absent [{}]",
            self.fixed_pattern(),
            Self::letters(&self.present),
            Self::letters(&self.absent)
        )?;
        for (i, excluded) in self.exclusions.iter().enumerate() {
            if !excluded.is_empty() {
                write!(f, " | not@{}: {}", i + 1, Self::letters(excluded))?;
            }
        }
        Ok(())
    }
}
