//! Word Ladder Solver
//!
//! Finds the shortest chain of single-symbol substitutions between two
//! equal-length words, where every intermediate word comes from a dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::solver::Ladder;
//!
//! let ladder = Ladder::new("cat", "dog", ["cat", "cot", "cog", "dog"]).unwrap();
//!
//! assert_eq!(ladder.distance(), Some(3));
//! println!("{ladder}"); // cat-->cot-->cog-->dog
//! ```

// Core domain types
pub mod core;

// Neighbor graph over dictionary words
pub mod index;

// Shortest-path search and ladder reconstruction
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
