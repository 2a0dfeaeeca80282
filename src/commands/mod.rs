//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;
pub mod test_all;

pub use analyze::{ScoreAnalysis, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use test_all::{TestAllConfig, TestAllStatistics, WordTestResult, run_test_all};
