//! The final, length-bounded word list.
//!
//! [`OutputList::from_words`] is the length filter: it keeps every canonical
//! word whose character count (hyphens included) is at most the bound, in
//! ascending lexicographic order.

use std::path::Path;

use serde::Serialize;

use crate::analysis::normalizer::{CanonicalWord, WordSet};
use crate::error::{Result, WordmillError};
use crate::storage;

/// Default maximum word length.
pub const DEFAULT_MAX_LEN: usize = 15;

/// Validate a maximum word length.
pub fn validate_max_len(max_len: usize) -> Result<usize> {
    if max_len == 0 {
        return Err(WordmillError::config("max-len must be at least 1"));
    }
    Ok(max_len)
}

/// An immutable, sorted, deduplicated word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputList {
    words: Vec<CanonicalWord>,
    max_len: usize,
}

impl OutputList {
    /// Keep words of at most `max_len` characters.
    pub fn from_words(words: WordSet, max_len: usize) -> Self {
        // BTreeSet iteration is already ascending.
        let words = words
            .into_iter()
            .filter(|word| word.char_len() <= max_len)
            .collect();
        OutputList { words, max_len }
    }

    pub fn words(&self) -> &[CanonicalWord] {
        &self.words
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(CanonicalWord::as_str)
    }

    /// Write one word per line, replacing `path` atomically.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        storage::write_lines_atomic(path, self.iter())
    }
}

/// Order words by (length, word), shortest first.
pub fn sorted_by_length<'a, I>(words: I) -> Vec<CanonicalWord>
where
    I: IntoIterator<Item = &'a CanonicalWord>,
{
    let mut sorted: Vec<CanonicalWord> = words.into_iter().cloned().collect();
    sorted.sort_by(|a, b| a.char_len().cmp(&b.char_len()).then_with(|| a.cmp(b)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> WordSet {
        words.iter().filter_map(|w| CanonicalWord::parse(w)).collect()
    }

    #[test]
    fn test_length_filter() {
        let list = OutputList::from_words(set(&["a", "supercalifragilisticexpialidocious"]), 15);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_bound_is_inclusive_and_counts_hyphens() {
        let list = OutputList::from_words(set(&["well-known", "wellknown", "re-do"]), 9);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["re-do", "wellknown"]);

        let list = OutputList::from_words(set(&["well-known"]), 10);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_sorted_output() {
        let list = OutputList::from_words(set(&["pear", "apple", "fig", "banana"]), 15);
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec!["apple", "banana", "fig", "pear"]
        );
    }

    #[test]
    fn test_sorted_by_length() {
        let words = set(&["bbb", "a", "cc", "aa"]);
        let sorted: Vec<String> = sorted_by_length(&words)
            .into_iter()
            .map(CanonicalWord::into_string)
            .collect();
        assert_eq!(sorted, vec!["a", "aa", "cc", "bbb"]);
    }

    #[test]
    fn test_validate_max_len() {
        assert!(validate_max_len(0).is_err());
        assert_eq!(validate_max_len(15).unwrap(), 15);
    }
}
