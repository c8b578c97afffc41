//! Word ladder solving
//!
//! Shortest-path search over an adjacency index and ladder reconstruction.

mod ladder;
pub mod search;

pub use ladder::{Ladder, NO_PATH, STEP_SEPARATOR, UNREACHABLE};
pub use search::frontier_distance;
