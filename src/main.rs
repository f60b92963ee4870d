//! Wordle Autoplayer - CLI
//!
//! Watch the solver play in a TUI, solve a single word, evaluate a guess or
//! run the solver over the whole word list.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_autoplayer::{
    commands::{
        TestAllOptions, evaluate_guess, print_test_all_statistics, run_test_all, solve_word,
    },
    core::Word,
    output::{print_evaluation, print_guess, print_solve_error, print_solve_header, print_solve_result},
    solver::{SolveConfig, StrategyConfig},
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_autoplayer",
    about = "Self-playing Wordle solver driven by accumulated letter constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: enhanced (default) or classic
    #[arg(short, long, global = true, default_value = "enhanced")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file of words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret selection and random choices (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the solver play in a TUI (default)
    Play,

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show the selection stage and candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Animate "Thinking..." between guesses
        #[arg(short, long)]
        pacing: bool,

        /// Always open with this word
        #[arg(short = 'f', long)]
        opener: Option<String>,
    },

    /// Show the feedback for one guess against a secret
    Evaluate {
        guess: String,
        secret: String,
    },

    /// Run the solver against every word in the list
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Always open with this word
        #[arg(short = 'f', long)]
        opener: Option<String>,
    },
}

/// Load the word list named by the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    let words = match wordlist {
        "embedded" => WordList::embedded(),
        path => WordList::load(path).with_context(|| format!("failed to read word list {path}"))?,
    };
    if words.is_empty() {
        bail!("word list '{wordlist}' contains no five-letter words");
    }
    debug!("loaded {} words from {wordlist}", words.len());
    Ok(words)
}

fn build_strategy(name: &str, opener: Option<&str>) -> Result<StrategyConfig> {
    let strategy = StrategyConfig::from_name(name);
    match opener {
        Some(text) => {
            let opener = Word::new(text).with_context(|| format!("invalid opener '{text}'"))?;
            Ok(strategy.with_opener(opener))
        }
        None => Ok(strategy),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    debug!("seed {seed}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, &cli.strategy, seed),
        Commands::Solve {
            word,
            verbose,
            pacing,
            opener,
        } => run_solve_command(&words, &cli.strategy, seed, &word, verbose, pacing, opener.as_deref()),
        Commands::Evaluate { guess, secret } => {
            let (guess, secret, feedback) = evaluate_guess(&guess, &secret)?;
            print_evaluation(&guess, &secret, &feedback);
            Ok(())
        }
        Commands::TestAll { limit, opener } => {
            run_test_all_command(&words, &cli.strategy, seed, limit, opener.as_deref())
        }
    }
}

fn run_solve_command(
    words: &WordList,
    strategy_name: &str,
    seed: u64,
    word: &str,
    verbose: bool,
    pacing: bool,
    opener: Option<&str>,
) -> Result<()> {
    let strategy = build_strategy(strategy_name, opener)?;
    let secret = Word::new(word).with_context(|| format!("invalid secret '{word}'"))?;
    print_solve_header(&secret, strategy.name);

    let config = SolveConfig::default().with_pacing(pacing);
    let result = solve_word(
        words,
        secret.text(),
        strategy,
        StdRng::seed_from_u64(seed),
        config,
        |record| print_guess(record, verbose),
    );

    match result {
        Ok(outcome) => {
            print_solve_result(&outcome);
            Ok(())
        }
        Err(e) => {
            print_solve_error(&secret, &e);
            Err(e.into())
        }
    }
}

fn run_test_all_command(
    words: &WordList,
    strategy_name: &str,
    seed: u64,
    limit: Option<usize>,
    opener: Option<&str>,
) -> Result<()> {
    let strategy = build_strategy(strategy_name, opener)?;

    println!("\n{}", "═".repeat(70));
    println!(" Wordle Autoplayer Batch Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} words", words.deduplicated().len());
    println!("Strategy: {}", strategy.name);
    println!("Seed: {seed}");
    if let Some(word) = opener {
        println!("Forced opener: {word}");
    }
    println!();

    let options = TestAllOptions {
        seed,
        limit,
        show_progress: true,
    };
    let stats = run_test_all(words, &strategy, options)?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_play_command(words: &WordList, strategy_name: &str, seed: u64) -> Result<()> {
    use wordle_autoplayer::interactive::{App, run_tui};

    let app = App::new(words, StrategyConfig::from_name(strategy_name), seed)?;
    run_tui(app)
}
