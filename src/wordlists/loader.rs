//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a file or from string slices.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Entries are trimmed and blank lines are skipped. Duplicates are kept;
/// the adjacency index removes them.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-separated text into words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Word::new)
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::DEMO;
///
/// let words = words_from_slice(DEMO);
/// assert_eq!(words.len(), DEMO.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().map(|&s| Word::new(s)).collect()
}
