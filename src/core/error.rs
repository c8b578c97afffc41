//! Error type for ladder construction

use thiserror::Error;

/// Reasons a ladder query cannot be constructed
///
/// An unreachable end word is not an error; it is reported through
/// `Ladder::distance` returning `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// Start and end words have different lengths
    #[error("start and end words must have equal length, got {start_len} and {end_len}")]
    InvalidInput { start_len: usize, end_len: usize },
}
