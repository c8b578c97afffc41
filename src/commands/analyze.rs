//! Word analysis command
//!
//! Reports a word's neighbors and the shape of the graph it lives in.

use crate::core::{LadderError, Word};
use crate::index::AdjacencyIndex;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub in_dictionary: bool,
    pub neighbors: Vec<String>,
    pub indexed_words: usize,
    pub edges: usize,
    pub max_degree: usize,
}

/// Analyze `word` against the dictionary words of the same length
///
/// # Errors
///
/// Never fails for a single word; the error type is shared with the other
/// commands that build an index.
pub fn analyze_word(word: &str, dictionary: &[Word]) -> Result<AnalysisResult, LadderError> {
    let word = Word::new(word);
    let index = AdjacencyIndex::build(&word, &word, dictionary)?;

    let neighbors = index
        .neighbors(&word)
        .map(|w| w.text().to_string())
        .collect();

    Ok(AnalysisResult {
        in_dictionary: dictionary.contains(&word),
        word: word.text().to_string(),
        neighbors,
        indexed_words: index.len(),
        edges: index.edge_count(),
        max_degree: index.max_degree(),
    })
}
