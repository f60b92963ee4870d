//! Feedback for a single guess against a known secret

use crate::core::{Feedback, Word, WordError};

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not a valid five-letter word.
pub fn evaluate_guess(guess: &str, secret: &str) -> Result<(Word, Word, Feedback), WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    let feedback = Feedback::evaluate(&guess, &secret);
    Ok((guess, secret, feedback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_normalised_words() {
        let (guess, secret, feedback) = evaluate_guess("Slate", "CRANE").unwrap();
        assert_eq!(guess.text(), "slate");
        assert_eq!(secret.text(), "crane");
        assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            evaluate_guess("slat", "crane").unwrap_err(),
            WordError::InvalidLength(4)
        );
        assert!(evaluate_guess("slate", "cr4ne").is_err());
    }
}
