//! Core domain types for word ladders
//!
//! Words, the substitution distance between them, and the construction error.
//! All types here are pure and have no I/O.

mod error;
mod word;

pub use error::LadderError;
pub use word::Word;
