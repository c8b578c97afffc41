//! Adjacency index over same-length dictionary words
//!
//! Words are stored once in ascending order and addressed by their position
//! (an id). Each id maps to the sorted ids of the words exactly one
//! substitution away, so neighbor iteration follows word order.
//!
//! Building is O(n² · L) for n indexed words of length L. Each word's
//! neighbor list is independent of the others and is computed in parallel.

use crate::core::{LadderError, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Immutable neighbor mapping for one ladder query
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    word_len: usize,
    words: Vec<Word>,
    ids: FxHashMap<Word, usize>,
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyIndex {
    /// Build the index for a `start` → `end` query
    ///
    /// Keeps only dictionary words with the same length as `start`, and
    /// always indexes `start` and `end` themselves even if the dictionary
    /// lacks them.
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::InvalidInput`] if `start` and `end` differ in
    /// length.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::index::AdjacencyIndex;
    ///
    /// let dictionary = ["cot", "cog", "dogs"].map(Word::new);
    /// let index = AdjacencyIndex::build(&Word::new("cat"), &Word::new("dog"), &dictionary).unwrap();
    ///
    /// assert_eq!(index.len(), 4); // cat, cog, cot, dog
    /// assert!(!index.contains(&Word::new("dogs")));
    /// ```
    pub fn build<'a, I>(start: &Word, end: &Word, dictionary: I) -> Result<Self, LadderError>
    where
        I: IntoIterator<Item = &'a Word>,
    {
        if start.len() != end.len() {
            return Err(LadderError::InvalidInput {
                start_len: start.len(),
                end_len: end.len(),
            });
        }

        let word_len = start.len();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("build_index", word_len).entered();

        let mut words: Vec<Word> = dictionary
            .into_iter()
            .filter(|word| word.len() == word_len)
            .cloned()
            .collect();
        words.push(start.clone());
        words.push(end.clone());
        words.sort_unstable();
        words.dedup();

        let ids = words
            .iter()
            .enumerate()
            .map(|(id, word)| (word.clone(), id))
            .collect();

        let neighbors: Vec<Vec<usize>> = words
            .par_iter()
            .map(|word| {
                words
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| word.is_neighbor(other))
                    .map(|(id, _)| id)
                    .collect()
            })
            .collect();

        let index = Self {
            word_len,
            words,
            ids,
            neighbors,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            words = index.len(),
            edges = index.edge_count(),
            "adjacency index built"
        );

        Ok(index)
    }

    /// Length shared by every indexed word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of indexed words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.ids.contains_key(word)
    }

    /// All indexed words in ascending order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Neighbors of `word` in ascending order
    ///
    /// Words that are not indexed have no neighbors.
    pub fn neighbors<'a>(&'a self, word: &Word) -> impl Iterator<Item = &'a Word> + use<'a> {
        let ids = self.id_of(word).map_or(&[][..], |id| self.neighbor_ids(id));
        ids.iter().map(move |&id| &self.words[id])
    }

    /// Number of neighbors of `word`, zero if it is not indexed
    #[must_use]
    pub fn degree(&self, word: &Word) -> usize {
        self.id_of(word).map_or(0, |id| self.neighbors[id].len())
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Largest neighbor count over all indexed words
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.neighbors.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub(crate) fn id_of(&self, word: &Word) -> Option<usize> {
        self.ids.get(word).copied()
    }

    pub(crate) fn word(&self, id: usize) -> &Word {
        &self.words[id]
    }

    pub(crate) fn neighbor_ids(&self, id: usize) -> &[usize] {
        &self.neighbors[id]
    }
}
