//! Word lists for ladder solving
//!
//! Provides a small embedded demo dictionary and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DEMO, DEMO_COUNT};
