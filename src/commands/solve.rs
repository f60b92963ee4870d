//! Word solving command
//!
//! Plays one session against a chosen secret and returns the solution path.

use crate::core::Word;
use crate::output::Pacer;
use crate::solver::{GuessRecord, Session, SolveConfig, SolveError, SolveOutcome, StrategyConfig};
use crate::wordlists::WordList;
use log::{debug, warn};
use rand::Rng;

/// Solve `secret` with the given strategy
///
/// `observer` is called after every guess. When `config.enable_pacing` is
/// set, a "Thinking..." animation runs before each guess and the finished
/// board lingers briefly.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid five-letter word
/// - The word list is empty
/// - The solver runs out of words before finding the secret
pub fn solve_word<R: Rng>(
    words: &WordList,
    secret: &str,
    strategy: StrategyConfig,
    rng: R,
    config: SolveConfig,
    observer: impl FnMut(&GuessRecord),
) -> Result<SolveOutcome, SolveError> {
    let pacer = Pacer::new(config.enable_pacing);
    solve_word_with_pacer(words, secret, strategy, rng, config, pacer, observer)
}

/// [`solve_word`] with the pacing animation supplied by the caller
///
/// `config.enable_pacing` is ignored; `pacer` alone decides whether and how
/// long to pause.
///
/// # Errors
///
/// Same as [`solve_word`].
pub fn solve_word_with_pacer<R: Rng>(
    words: &WordList,
    secret: &str,
    strategy: StrategyConfig,
    rng: R,
    config: SolveConfig,
    pacer: Pacer,
    mut observer: impl FnMut(&GuessRecord),
) -> Result<SolveOutcome, SolveError> {
    let secret = Word::new(secret)?;
    if !words.contains(&secret) {
        warn!("{secret} is not in the word list, the solver may need to relax its constraints");
    }

    let mut session = Session::new(words, secret, strategy, rng, config)?;

    while !session.is_solved() {
        if let Err(e) = pacer.think() {
            debug!("pacing animation failed: {e}");
        }
        observer(session.step()?);
    }
    pacer.linger();

    Ok(session.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn solve_word_succeeds() {
        let words = WordList::embedded();
        let mut turns = 0;
        let outcome = solve_word(
            &words,
            "crane",
            StrategyConfig::enhanced(),
            rng(),
            SolveConfig::default(),
            |_| turns += 1,
        )
        .unwrap();

        assert_eq!(outcome.secret.text(), "crane");
        assert_eq!(outcome.stats.guesses, turns);
        assert!(outcome.guesses.last().unwrap().feedback.is_solved());
    }

    #[test]
    fn secret_is_normalised() {
        let words = WordList::embedded();
        let outcome = solve_word(
            &words,
            "  CRANE ",
            StrategyConfig::classic(),
            rng(),
            SolveConfig::default(),
            |_| {},
        )
        .unwrap();
        assert_eq!(outcome.secret.text(), "crane");
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let words = WordList::embedded();
        let result = solve_word(
            &words,
            "cranes",
            StrategyConfig::enhanced(),
            rng(),
            SolveConfig::default(),
            |_| {},
        );
        assert!(matches!(result, Err(SolveError::InvalidWord(_))));
    }

    #[test]
    fn same_seed_same_game() {
        let words = WordList::embedded();
        let play = || {
            solve_word(
                &words,
                "vivid",
                StrategyConfig::classic(),
                StdRng::seed_from_u64(5),
                SolveConfig::default(),
                |_| {},
            )
            .unwrap()
            .guesses
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn secret_missing_from_list_can_get_stuck() {
        let words = WordList::from_text("crane slate");
        let result = solve_word(
            &words,
            "fuzzy",
            StrategyConfig::classic().with_opener(Word::new("crane").unwrap()),
            rng(),
            SolveConfig::default(),
            |_| {},
        );
        assert!(matches!(result, Err(SolveError::Stuck { attempt: 2, .. })));
    }

    #[test]
    fn pacing_leaves_guesses_unchanged() {
        let words = WordList::embedded();
        let strategy = StrategyConfig::enhanced();

        let paced = solve_word_with_pacer(
            &words,
            "eerie",
            strategy.clone(),
            StdRng::seed_from_u64(21),
            SolveConfig::default().with_pacing(true),
            Pacer::new(true).with_timing(Duration::ZERO, Duration::ZERO),
            |_| {},
        )
        .unwrap();
        let unpaced = solve_word(
            &words,
            "eerie",
            strategy,
            StdRng::seed_from_u64(21),
            SolveConfig::default(),
            |_| {},
        )
        .unwrap();

        assert_eq!(paced.guesses, unpaced.guesses);
        assert_eq!(paced.stats.guesses, unpaced.stats.guesses);
    }

    #[test]
    fn paced_classic_matches_unpaced_across_seeds() {
        let words = WordList::embedded();
        for seed in [1, 2, 3] {
            let play = |pacer| {
                solve_word_with_pacer(
                    &words,
                    "vivid",
                    StrategyConfig::classic(),
                    StdRng::seed_from_u64(seed),
                    SolveConfig::default(),
                    pacer,
                    |_| {},
                )
                .unwrap()
                .guesses
            };
            let quick = Pacer::new(true).with_timing(Duration::ZERO, Duration::ZERO);
            assert_eq!(play(quick), play(Pacer::new(false)));
        }
    }
}
