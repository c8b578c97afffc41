//! Ladder word representation
//!
//! A Word is a fixed sequence of symbols. Symbols are `char`s compared by
//! plain equality; no case folding or normalization is applied.

use std::fmt;

/// A word that can appear on a ladder
///
/// Stores the original text alongside its symbols so that length and
/// positional comparison are O(1) per symbol. Ordering is symbol-wise
/// lexicographic, which is the tie-break order used by the solver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    symbols: Box<[char]>,
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cat");
    /// assert_eq!(word.text(), "cat");
    /// assert_eq!(word.len(), 3);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let symbols = text.chars().collect();
        Self { symbols, text }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's symbols
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Count the positions at which two words differ
    ///
    /// Positions past the end of the shorter word count as differences, so
    /// the result is zero only for equal words.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let cat = Word::new("cat");
    /// assert_eq!(cat.differ(&Word::new("cot")), 1);
    /// assert_eq!(cat.differ(&Word::new("dog")), 3);
    /// assert_eq!(cat.differ(&cat), 0);
    /// ```
    #[must_use]
    pub fn differ(&self, other: &Self) -> usize {
        let mismatched = self
            .symbols
            .iter()
            .zip(other.symbols.iter())
            .filter(|(a, b)| a != b)
            .count();
        mismatched + self.len().abs_diff(other.len())
    }

    /// Check whether two words are one substitution apart
    ///
    /// Stops scanning as soon as a second mismatch is found.
    #[must_use]
    pub fn is_neighbor(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut mismatches = 0;
        for (a, b) in self.symbols.iter().zip(other.symbols.iter()) {
            if a != b {
                mismatches += 1;
                if mismatches > 1 {
                    return false;
                }
            }
        }
        mismatches == 1
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&Word> for Word {
    fn from(word: &Word) -> Self {
        word.clone()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_keeps_text() {
        let word = Word::new("cat");
        assert_eq!(word.text(), "cat");
        assert_eq!(word.symbols(), &['c', 'a', 't']);
        assert_eq!(word.len(), 3);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_case_is_significant() {
        assert_ne!(Word::new("Cat"), Word::new("cat"));
        assert_eq!(Word::new("Cat").differ(&Word::new("cat")), 1);
    }

    #[test]
    fn word_length_counts_symbols_not_bytes() {
        let word = Word::new("größe");
        assert_eq!(word.len(), 5);
        assert!(word.is_neighbor(&Word::new("grüße")));
    }

    #[test]
    fn empty_word() {
        let word = Word::new("");
        assert!(word.is_empty());
        assert_eq!(word.differ(&Word::new("")), 0);
        assert!(!word.is_neighbor(&Word::new("")));
    }

    #[test]
    fn differ_counts_positions() {
        let cat = Word::new("cat");
        assert_eq!(cat.differ(&Word::new("cat")), 0);
        assert_eq!(cat.differ(&Word::new("cot")), 1);
        assert_eq!(cat.differ(&Word::new("cog")), 2);
        assert_eq!(cat.differ(&Word::new("dog")), 3);
    }

    #[test]
    fn differ_counts_length_difference() {
        let cat = Word::new("cat");
        assert_eq!(cat.differ(&Word::new("cats")), 1);
        assert_eq!(Word::new("cats").differ(&cat), 1);
        assert_eq!(cat.differ(&Word::new("")), 3);
    }

    #[test]
    fn neighbor_requires_equal_length() {
        let cat = Word::new("cat");
        assert!(cat.is_neighbor(&Word::new("cot")));
        assert!(cat.is_neighbor(&Word::new("bat")));
        assert!(!cat.is_neighbor(&Word::new("cats")));
        assert!(!cat.is_neighbor(&Word::new("cat")));
        assert!(!cat.is_neighbor(&Word::new("dog")));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut words = vec![Word::new("cot"), Word::new("cat"), Word::new("bat")];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["bat", "cat", "cot"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("cog");
        assert_eq!(format!("{word}"), "cog");
    }
}
