//! Command implementations

pub mod auto;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use auto::run_auto;
pub use benchmark::{BenchmarkResult, all_secrets, random_secrets, run_benchmark};
pub use simple::{play_human_game, run_simple};
pub use solve::{SolveConfig, solve_code};
