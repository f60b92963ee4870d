//! Per-letter feedback for a guess
//!
//! A [`Feedback`] holds one [`Verdict`] per position of the guess:
//! - Correct: letter in the right position (green)
//! - Present: letter in the word, elsewhere (yellow)
//! - Absent: letter not in the word, or every occurrence already accounted for (gray)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Correct or Present: the letter is accounted for in the secret
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Verdicts for every position of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Compute the feedback when `guess` is played against `secret`
    ///
    /// Duplicate letters are handled the way the game does: exact matches
    /// claim their letters first, then the remaining positions are marked
    /// Present left to right only while unclaimed copies of the letter remain
    /// in the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplayer::core::{Feedback, Verdict::*, Word};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let secret = Word::new("crane").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&guess, &secret);
    /// assert_eq!(feedback.verdicts(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        // Allow: Index needed to compare guess[i] with secret[i] and set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                verdicts[i] = Verdict::Correct;
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if verdicts[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                verdicts[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Verdict {
        self.0[position]
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of Correct-or-Present verdicts
    #[must_use]
    pub fn hits(&self) -> usize {
        self.0.iter().filter(|v| v.is_hit()).count()
    }

    /// Parse feedback from a string like "GY-G-" or "🟩🟨⬜🟩⬜"
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplayer::core::Feedback;
    ///
    /// let a = Feedback::from_str("GY-GY").unwrap();
    /// let b = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let parsed: Vec<Verdict> = s.chars().map(Verdict::from_char).collect::<Option<_>>()?;
        let verdicts: [Verdict; WORD_LENGTH] = parsed.try_into().ok()?;
        Some(Self(verdicts))
    }

    /// Emoji rendering, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.symbol()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Verdict::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, secret: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn exact_match_is_all_correct() {
        let feedback = eval("cigar", "cigar");
        assert_eq!(feedback, Feedback::SOLVED);
        assert!(feedback.is_solved());
        assert_eq!(feedback.hits(), 5);
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        let feedback = eval("abcde", "fghij");
        assert_eq!(feedback.verdicts(), &[Absent; WORD_LENGTH]);
        assert_eq!(feedback.hits(), 0);
    }

    #[test]
    fn duplicate_letters_never_exceed_secret_count() {
        // SLEEP has two E's; EPEES has three. Both middle E's are exact
        // matches, so the leading E finds no unclaimed copy left.
        let feedback = eval("epees", "sleep");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Present, Correct, Correct, Present]
        );

        let guess = Word::new("epees").unwrap();
        let e_hits = (0..WORD_LENGTH)
            .filter(|&i| guess.char_at(i) == b'e' && feedback.at(i).is_hit())
            .count();
        assert_eq!(e_hits, Word::new("sleep").unwrap().count_of(b'e'));
    }

    #[test]
    fn single_secret_letter_marks_one_guess_copy() {
        // CRANE has one E; SLEEP guesses two. The first E is Present, the
        // second is Absent.
        let feedback = eval("sleep", "crane");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Absent, Present, Absent, Absent]
        );
    }

    #[test]
    fn exact_match_claims_letter_before_earlier_copy() {
        // ROBOT vs FLOOR: the second O is exact, the first O takes the
        // remaining copy.
        let feedback = eval("robot", "floor");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Absent, Correct, Absent]
        );

        // Both L's of the secret are exactly matched, so the leading L in
        // the guess gets nothing.
        let feedback = eval("lolly", "golly");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Correct, Correct, Correct, Correct]
        );
    }

    #[test]
    fn slate_against_crane() {
        let feedback = eval("slate", "crane");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn from_str_valid() {
        let a = Feedback::from_str("GYG--").unwrap();
        let b = Feedback::from_str("🟩🟨🟩⬜⬜").unwrap();
        let c = Feedback::from_str("gyg__").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.verdicts(), &[Correct, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn from_str_invalid() {
        assert!(Feedback::from_str("GYGGYG").is_none());
        assert!(Feedback::from_str("GYG").is_none());
        assert!(Feedback::from_str("GXGGY").is_none());
        assert!(Feedback::from_str("").is_none());
    }

    #[test]
    fn emoji_round_trip() {
        let feedback = eval("crane", "slate");
        assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
        assert_eq!(Feedback::from_str(&feedback.to_emoji()), Some(feedback));
    }
}
