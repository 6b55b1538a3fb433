//! Command implementations

pub mod benchmark;
pub mod hotseat;
pub mod play;
pub mod score;
pub mod split;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, guess_range, run_benchmark};
pub use hotseat::{HotseatSummary, run_hotseat};
pub use play::{PlaySummary, run_play};
pub use score::{ScoreResult, score_words};
pub use split::{SplitResult, pool_from_list, split_pool};
