//! Ordered, index-addressable word collection
//!
//! Dictionary order is meaningful: it fixes the indices of the similarity table.

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// An ordered sequence of unique words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<[u8; 5], usize>,
}

/// Error type for dictionaries that cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary contains no valid words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of any duplicate
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no words remain. An empty dictionary
    /// would be indistinguishable from a game that ran out of candidates.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Dictionary, Word};
    ///
    /// let words = ["crane", "slate", "crane"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.index_of(&Word::new("slate").unwrap()), Some(1));
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashMap::default();
        let mut unique = Vec::new();
        let mut duplicates = 0usize;

        for word in words {
            if index.contains_key(word.chars()) {
                duplicates += 1;
                continue;
            }
            index.insert(*word.chars(), unique.len());
            unique.push(word);
        }

        if duplicates > 0 {
            log::warn!("skipped {duplicates} duplicate dictionary entries");
        }

        if unique.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self {
            words: unique,
            index,
        })
    }

    /// Keep only the first `limit` words
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `limit` is zero.
    pub fn truncated(&self, limit: usize) -> Result<Self, DictionaryError> {
        Self::new(self.words.iter().take(limit).cloned())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Position of `word` in dictionary order
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.index.get(word.chars()).copied()
    }

    /// Look up a word by its text, case-insensitively
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.index_of(&word).map(|i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word.chars())
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(list: &[&str]) -> Result<Dictionary, DictionaryError> {
        Dictionary::new(list.iter().map(|w| Word::new(*w).unwrap()))
    }

    #[test]
    fn preserves_order() {
        let dict = dictionary(&["crane", "slate", "store"]).unwrap();
        let texts: Vec<&str> = dict.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "store"]);
        assert_eq!(dict.get(2).unwrap().text(), "store");
        assert!(dict.get(3).is_none());
    }

    #[test]
    fn drops_duplicates_keeping_first() {
        let dict = dictionary(&["crane", "slate", "crane", "store", "slate"]).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.index_of(&Word::new("store").unwrap()), Some(2));
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        assert_eq!(dictionary(&[]).unwrap_err(), DictionaryError::Empty);
    }

    #[test]
    fn find_is_case_insensitive() {
        let dict = dictionary(&["crane", "slate"]).unwrap();
        assert_eq!(dict.find("SLATE").map(Word::text), Some("slate"));
        assert!(dict.find("stare").is_none());
        assert!(dict.find("toolong").is_none());
    }

    #[test]
    fn truncation() {
        let dict = dictionary(&["crane", "slate", "store"]).unwrap();
        let small = dict.truncated(2).unwrap();

        assert_eq!(small.len(), 2);
        assert!(!small.contains(&Word::new("store").unwrap()));
        assert_eq!(dict.truncated(0).unwrap_err(), DictionaryError::Empty);
        assert_eq!(dict.truncated(10).unwrap().len(), 3);
    }
}
