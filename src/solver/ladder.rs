//! Word ladder query
//!
//! A [`Ladder`] is solved completely when it is constructed and is
//! read-only afterwards.

use super::search::{distances_to, walk_down};
use crate::core::{LadderError, Word};
use crate::index::AdjacencyIndex;
use std::fmt;

/// Separator between consecutive words in a rendered ladder
pub const STEP_SEPARATOR: &str = "-->";

/// Rendering of a ladder whose end word cannot be reached
pub const NO_PATH: &str = "There is no path";

/// Signed distance reported for an unreachable end word
pub const UNREACHABLE: i64 = -1;

/// A solved shortest-path query between two words
#[derive(Debug, Clone)]
pub struct Ladder {
    start: Word,
    end: Word,
    index: AdjacencyIndex,
    distance: Option<usize>,
    path: Option<Vec<Word>>,
}

impl Ladder {
    /// Build the adjacency index and solve the query
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::InvalidInput`] if `start` and `end` differ in
    /// length.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::solver::Ladder;
    ///
    /// let ladder = Ladder::new("cat", "dog", ["cat", "cot", "cog", "dog"]).unwrap();
    /// assert_eq!(ladder.distance(), Some(3));
    /// assert_eq!(ladder.to_string(), "cat-->cot-->cog-->dog");
    ///
    /// let stuck = Ladder::new("cat", "dog", ["cat", "dog"]).unwrap();
    /// assert_eq!(stuck.distance(), None);
    /// assert_eq!(stuck.to_string(), "There is no path");
    ///
    /// assert!(Ladder::new("cat", "dogs", ["cat"]).is_err());
    /// ```
    pub fn new<I, W>(
        start: impl Into<Word>,
        end: impl Into<Word>,
        dictionary: I,
    ) -> Result<Self, LadderError>
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        let start = start.into();
        let end = end.into();
        let dictionary: Vec<Word> = dictionary.into_iter().map(Into::into).collect();
        let index = AdjacencyIndex::build(&start, &end, &dictionary)?;
        Ok(Self::from_index(start, end, index))
    }

    fn from_index(start: Word, end: Word, index: AdjacencyIndex) -> Self {
        let (distance, path) = match (index.id_of(&start), index.id_of(&end)) {
            (Some(start_id), Some(end_id)) => {
                let distances = distances_to(&index, end_id);
                let path = walk_down(&index, &distances, start_id);
                (path.as_ref().map(|p| p.len() - 1), path)
            }
            _ => (None, None),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(start = %start, end = %end, ?distance, "ladder solved");

        Self {
            start,
            end,
            index,
            distance,
            path,
        }
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> &Word {
        &self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(&self) -> &Word {
        &self.end
    }

    /// The adjacency index the query was solved on
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    /// Number of substitutions on a shortest ladder
    ///
    /// Returns `None` when no ladder connects the two words.
    #[inline]
    #[must_use]
    pub const fn distance(&self) -> Option<usize> {
        self.distance
    }

    /// Distance with [`UNREACHABLE`] standing in for "no ladder"
    #[must_use]
    pub fn signed_distance(&self) -> i64 {
        self.distance.map_or(UNREACHABLE, |d| d as i64)
    }

    /// One shortest ladder from start to end, both included
    ///
    /// When several shortest ladders exist, each step takes the
    /// alphabetically first word that stays on a shortest route.
    #[must_use]
    pub fn path(&self) -> Option<&[Word]> {
        self.path.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(path) = self.path() else {
            return f.write_str(NO_PATH);
        };

        for (i, word) in path.iter().enumerate() {
            if i > 0 {
                f.write_str(STEP_SEPARATOR)?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
