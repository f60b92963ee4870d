//! Ordered word list shared by every session

use super::WORDS;
use super::loader::{load_from_file, words_from_slice, words_from_text};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Ordered list of canonical words
///
/// List order matters: heuristic ties go to the earliest word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(words_from_text(text))
    }

    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    /// Copy of the list with repeated entries removed, first occurrence kept
    #[must_use]
    pub fn deduplicated(&self) -> Self {
        let mut seen = FxHashSet::default();
        Self::new(
            self.words
                .iter()
                .filter(|word| seen.insert(*word))
                .cloned()
                .collect(),
        )
    }

    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.words.iter().find(|w| **w == word)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_list_is_loaded() {
        let list = WordList::embedded();
        assert_eq!(list.len(), WORDS.len());
        assert!(list.find("crane").is_some());
        assert!(list.find("slate").is_some());
    }

    #[test]
    fn deduplicated_keeps_first_occurrence() {
        let list = WordList::from_text("crane slate crane irate slate");
        let unique = list.deduplicated();

        let texts: Vec<&str> = unique.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn find_normalises_query() {
        let list = WordList::from_text("crane slate");
        assert_eq!(list.find(" CRANE ").map(Word::text), Some("crane"));
        assert!(list.find("irate").is_none());
        assert!(list.find("nope").is_none());
    }

    #[test]
    fn empty_text_gives_empty_list() {
        assert!(WordList::from_text("abc toolong").is_empty());
    }
}
