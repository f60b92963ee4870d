//! Build script to generate the embedded word list
//!
//! Reads `data/words.txt`, checks every entry is a lowercase five-letter word
//! and writes a const array the library includes.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");
    let content = fs::read_to_string(WORD_LIST)
        .unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));

    let words = parse_words(&content);
    let source = render_words(&words);

    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORD_LIST}");
}

fn parse_words(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let word = line.trim().to_ascii_lowercase();
        if word.is_empty() {
            continue;
        }
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{WORD_LIST}:{}: '{word}' is not a five-letter word",
            line_no + 1
        );
        if seen.insert(word.clone()) {
            words.push(word);
        } else {
            println!("cargo:warning={WORD_LIST}:{}: duplicate '{word}' skipped", line_no + 1);
        }
    }

    words
}

fn render_words(words: &[String]) -> String {
    let mut source = String::new();
    source.push_str("// Generated from data/words.txt by build.rs\n\n");
    source.push_str("/// Five-letter words the solver guesses from and plays against\n");
    source.push_str("pub const WORDS: &[&str] = &[\n");
    for word in words {
        let _ = writeln!(source, "    \"{word}\",");
    }
    source.push_str("];\n\n");
    source.push_str("/// Number of words in WORDS\n");
    let _ = writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len());
    source
}
