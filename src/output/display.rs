//! Display functions for command results

use super::formatters::{LEGEND, feedback_tiles, plural};
use crate::core::{Feedback, Word};
use crate::solver::{GUESS_BUDGET, GuessRecord, SolveError, SolveOutcome};
use colored::Colorize;

/// Print the header for a single solve
pub fn print_solve_header(secret: &Word, strategy: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}   strategy: {}",
        secret.text().to_uppercase().bright_yellow().bold(),
        strategy.bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("{LEGEND}\n");
}

/// Print one guess as it is played
pub fn print_guess(record: &GuessRecord, verbose: bool) {
    let turn = format!("Turn {}:", record.attempt);
    let turn = if record.attempt > GUESS_BUDGET {
        turn.red()
    } else {
        turn.normal()
    };
    println!(
        "{turn} {} {}",
        feedback_tiles(&record.word, &record.feedback),
        record.feedback.to_emoji()
    );

    if verbose {
        match record.candidates {
            Some(n) => println!("  {} from {}", record.stage, plural(n, "candidate", "candidates")),
            None => println!("  {}", record.stage),
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(outcome: &SolveOutcome) {
    let stats = &outcome.stats;
    println!();
    if stats.exceeded_budget {
        println!(
            "{}",
            format!(
                "⚠️  Solved {} in {}, over the {GUESS_BUDGET}-guess budget",
                outcome.secret.text().to_uppercase(),
                plural(stats.guesses, "guess", "guesses")
            )
            .yellow()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "✅ Solved {} in {}!",
                outcome.secret.text().to_uppercase(),
                plural(stats.guesses, "guess", "guesses")
            )
            .green()
            .bold()
        );
    }
    println!("   Solve time: {:.2}ms", stats.elapsed.as_secs_f64() * 1000.0);
}

/// Print why a session could not finish
pub fn print_solve_error(secret: &Word, error: &SolveError) {
    println!();
    println!(
        "{}",
        format!("❌ Failed to solve: {}", secret.text().to_uppercase())
            .red()
            .bold()
    );
    println!("   Reason: {error}");
}

/// Print the oracle's verdict for a single guess
pub fn print_evaluation(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!(
        "{} vs {}: {} {}",
        guess.text().to_uppercase(),
        secret.text().to_uppercase(),
        feedback_tiles(guess, feedback),
        feedback.to_emoji()
    );
}
