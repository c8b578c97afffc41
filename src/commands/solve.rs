//! Ladder solving command
//!
//! Solves a single start/end query against a dictionary.

use crate::core::{LadderError, Word};
use crate::solver::Ladder;
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub start: String,
    pub end: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, end: String) -> Self {
        Self { start, end }
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub start: String,
    pub end: String,
    pub distance: Option<usize>,
    pub path: Option<Vec<String>>,
    pub indexed_words: usize,
    pub edges: usize,
    pub duration: Duration,
}

/// Solve the configured query against `dictionary`
///
/// # Errors
///
/// Returns [`LadderError::InvalidInput`] if the start and end words have
/// different lengths.
pub fn solve_ladder(config: SolveConfig, dictionary: &[Word]) -> Result<SolveResult, LadderError> {
    let timer = Instant::now();
    let ladder = Ladder::new(config.start.as_str(), config.end.as_str(), dictionary)?;
    let duration = timer.elapsed();

    let path = ladder
        .path()
        .map(|words| words.iter().map(|w| w.text().to_string()).collect());

    Ok(SolveResult {
        start: config.start,
        end: config.end,
        distance: ladder.distance(),
        path,
        indexed_words: ladder.index().len(),
        edges: ladder.index().edge_count(),
        duration,
    })
}
