//! Word list loading utilities
//!
//! Raw word lists are whitespace/newline separated. Entries are trimmed and
//! lowercased through [`Word::new`], and anything that is not exactly five
//! letters is dropped. Order and duplicates are kept.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse words from whitespace-delimited text
///
/// # Examples
/// ```
/// use wordle_autoplayer::wordlists::loader::words_from_text;
///
/// let words = words_from_text("Crane\r\nslate  toolong\n\nirate crane");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate", "irate", "crane"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    text.split_whitespace()
        .filter_map(|entry| Word::new(entry).ok())
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_autoplayer::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Convert embedded string slice to Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
