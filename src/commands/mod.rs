//! Command implementations

pub mod play;
pub mod solve;
pub mod test_all;

pub use play::{SecretChoice, parse_secret, run_play};
pub use solve::solve_word;
pub use test_all::{TestAllStatistics, WordTestResult, print_test_all_statistics, run_test_all};
