//! Test all words - batch self-play evaluation
//!
//! Plays one fresh session per secret word and aggregates the results.

use crate::core::Word;
use crate::output::formatters::{create_progress_bar, percent, plural};
use crate::solver::{GUESS_BUDGET, Session, SolveConfig, SolveError, SolveOutcome, StrategyConfig};
use crate::wordlists::WordList;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestAllOptions {
    /// Seeds the secret order and every session's random source
    pub seed: u64,
    /// Play at most this many secrets
    pub limit: Option<usize>,
    pub show_progress: bool,
}

impl Default for TestAllOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            limit: None,
            show_progress: true,
        }
    }
}

/// A secret the solver could not finish
#[derive(Debug, Clone)]
pub struct SolveFailure {
    pub secret: Word,
    pub reason: SolveError,
}

/// Statistics from a batch run
#[derive(Debug, Default, Clone)]
pub struct TestAllStatistics {
    pub attempted: usize,
    pub solved: usize,
    pub failures: Vec<SolveFailure>,
    /// Solved, but only after more than six guesses
    pub exceeded_budget: usize,
    pub total_guesses: usize,
    /// Solver time summed over solved sessions
    pub total_solve_time: Duration,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub wall_time: Duration,
}

impl TestAllStatistics {
    /// Fold one session result into the totals
    pub fn record(&mut self, secret: Word, result: Result<SolveOutcome, SolveError>) {
        self.attempted += 1;
        match result {
            Ok(outcome) => {
                let stats = outcome.stats;
                self.solved += 1;
                self.total_guesses += stats.guesses;
                self.total_solve_time += stats.elapsed;
                *self.guess_distribution.entry(stats.guesses).or_insert(0) += 1;
                if stats.exceeded_budget {
                    self.exceeded_budget += 1;
                }
            }
            Err(reason) => self.failures.push(SolveFailure { secret, reason }),
        }
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Average guesses per solved word
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.solved as f64
        }
    }

    /// Average solver time per solved word
    #[must_use]
    pub fn average_solve_time(&self) -> Duration {
        u32::try_from(self.solved)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_solve_time / n)
    }
}

/// Secrets for a batch: deduplicated, shuffled by `seed`, then truncated to `limit`
#[must_use]
pub fn select_secrets(words: &WordList, seed: u64, limit: Option<usize>) -> Vec<Word> {
    let mut secrets = words.deduplicated().as_slice().to_vec();
    secrets.shuffle(&mut StdRng::seed_from_u64(seed));
    if let Some(limit) = limit {
        secrets.truncate(limit);
    }
    secrets
}

/// Random source for the session at `index`, independent of thread scheduling
fn session_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Run the solver against every word in the list (or a limited subset)
///
/// Sessions run in parallel, each with fresh state and pacing off. A stuck
/// session is recorded as a failure and the batch continues.
///
/// # Errors
///
/// Returns [`SolveError::EmptyWordList`] if `words` is empty.
pub fn run_test_all(
    words: &WordList,
    strategy: &StrategyConfig,
    options: TestAllOptions,
) -> Result<TestAllStatistics, SolveError> {
    if words.is_empty() {
        return Err(SolveError::EmptyWordList);
    }

    let secrets = select_secrets(words, options.seed, options.limit);
    info!(
        "testing {} secrets with the {} strategy (seed {})",
        secrets.len(),
        strategy.name,
        options.seed
    );

    let pb = if options.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let config = SolveConfig::default().with_pacing(false);
    let started = Instant::now();

    let results: Vec<(Word, Result<SolveOutcome, SolveError>)> = secrets
        .into_par_iter()
        .enumerate()
        .map(|(index, secret)| {
            let result = Session::new(
                words,
                secret.clone(),
                strategy.clone(),
                session_rng(options.seed, index),
                config,
            )
            .and_then(|session| session.run(|_| {}));
            pb.inc(1);
            (secret, result)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut stats = TestAllStatistics::default();
    for (secret, result) in results {
        stats.record(secret, result);
    }
    stats.wall_time = started.elapsed();
    Ok(stats)
}

/// Print batch statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    for failure in &stats.failures {
        println!(
            "{} {}",
            "Failed to solve:".red(),
            failure.secret.text().to_uppercase().red().bold()
        );
        println!("Reason: {}", failure.reason);
        println!("=====================");
    }

    println!("\n{}", "═".repeat(70));
    println!(" Summary ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words attempted:   {}", stats.attempted);
    println!(
        "  Successfully solved:     {} {}",
        stats.solved,
        format!("({:.0}%)", percent(stats.solved, stats.attempted)).green()
    );
    println!(
        "  Over {GUESS_BUDGET} guesses:          {} {}",
        stats.exceeded_budget,
        format!("({:.0}%)", percent(stats.exceeded_budget, stats.attempted)).yellow()
    );
    if stats.failed() > 0 {
        println!(
            "  Stuck:                   {} {}",
            stats.failed(),
            format!("({:.0}%)", percent(stats.failed(), stats.attempted)).red()
        );
    }
    println!(
        "  Average guesses:         {}",
        format!("{:.2}", stats.average_guesses()).bright_yellow().bold()
    );
    println!(
        "  Average solve time:      {:.2}ms",
        stats.average_solve_time().as_secs_f64() * 1000.0
    );
    println!("  Wall time:               {:.2}s", stats.wall_time.as_secs_f64());

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &stats.guess_distribution {
        let bar = create_progress_bar(count, max_count, 40);
        let bar = if guesses > GUESS_BUDGET {
            bar.yellow()
        } else {
            bar.green()
        };
        println!(
            "  {:>11}: {bar} {} ({:5.1}%)",
            plural(guesses, "guess", "guesses"),
            plural(count, "time", "times"),
            percent(count, stats.solved)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolveStats;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn quiet(seed: u64, limit: Option<usize>) -> TestAllOptions {
        TestAllOptions {
            seed,
            limit,
            show_progress: false,
        }
    }

    #[test]
    fn select_secrets_dedups_shuffles_and_limits() {
        let words = WordList::from_text("crane slate crane irate crate grate");
        let all = select_secrets(&words, 3, None);
        assert_eq!(all.len(), 5);

        let limited = select_secrets(&words, 3, Some(2));
        assert_eq!(limited.as_slice(), &all[..2]);
        assert_eq!(select_secrets(&words, 3, None), all);
    }

    #[test]
    fn batch_solves_every_listed_secret() {
        let words = WordList::embedded();
        let stats = run_test_all(&words, &StrategyConfig::enhanced(), quiet(1, Some(40))).unwrap();

        assert_eq!(stats.attempted, 40);
        assert_eq!(stats.solved, 40);
        assert_eq!(stats.failed(), 0);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 40);
        assert!(stats.average_guesses() >= 1.0);
    }

    #[test]
    fn batch_is_reproducible_per_seed() {
        let words = WordList::embedded();
        let strategy = StrategyConfig::classic();
        let a = run_test_all(&words, &strategy, quiet(9, Some(25))).unwrap();
        let b = run_test_all(&words, &strategy, quiet(9, Some(25))).unwrap();

        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.guess_distribution, b.guess_distribution);
    }

    #[test]
    fn limit_larger_than_list_plays_everything() {
        let words = WordList::from_text("crane slate irate");
        let stats = run_test_all(&words, &StrategyConfig::classic(), quiet(0, Some(50))).unwrap();
        assert_eq!(stats.attempted, 3);
        assert_eq!(stats.solved, 3);
    }

    #[test]
    fn empty_list_is_rejected() {
        let words = WordList::from_text("");
        let result = run_test_all(&words, &StrategyConfig::enhanced(), quiet(0, None));
        assert!(matches!(result, Err(SolveError::EmptyWordList)));
    }

    #[test]
    fn record_tracks_failures_and_budget() {
        let mut stats = TestAllStatistics::default();
        let outcome = |guesses| SolveOutcome {
            secret: word("crane"),
            guesses: Vec::new(),
            stats: SolveStats {
                guesses,
                elapsed: Duration::from_millis(4),
                exceeded_budget: guesses > GUESS_BUDGET,
            },
        };

        stats.record(word("crane"), Ok(outcome(3)));
        stats.record(word("crane"), Ok(outcome(7)));
        stats.record(
            word("fuzzy"),
            Err(SolveError::Stuck {
                attempt: 3,
                used: 2,
                constraints: String::new(),
            }),
        );

        assert_eq!(stats.attempted, 3);
        assert_eq!(stats.solved, 2);
        assert_eq!(stats.failed(), 1);
        assert_eq!(stats.failures[0].secret, word("fuzzy"));
        assert_eq!(stats.exceeded_budget, 1);
        assert!((stats.average_guesses() - 5.0).abs() < f64::EPSILON);
        assert_eq!(stats.average_solve_time(), Duration::from_millis(4));
        assert_eq!(stats.guess_distribution.get(&7), Some(&1));
    }
}
