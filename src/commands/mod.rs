//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_pairs};
pub use solve::{SolveConfig, SolveResult, solve_ladder};
